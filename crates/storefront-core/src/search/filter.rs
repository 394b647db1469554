//! Free-text catalog filter.

use regex::{Regex, RegexBuilder};

use crate::catalog::Product;

/// A compiled search query.
///
/// The query is sanitized by dropping every literal `*`, then compiled as a
/// case-insensitive regular expression matched anywhere in the product
/// name. A query that is not a valid expression is matched as a
/// case-insensitive literal substring instead.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    query: String,
    matcher: Matcher,
}

#[derive(Debug, Clone)]
enum Matcher {
    /// Empty query, everything matches.
    All,
    Pattern(Regex),
    /// Lowercased literal.
    Literal(String),
}

impl SearchFilter {
    /// Compile a query.
    pub fn new(query: &str) -> Self {
        let sanitized = sanitize(query);

        let matcher = if sanitized.is_empty() {
            Matcher::All
        } else {
            match RegexBuilder::new(&sanitized).case_insensitive(true).build() {
                Ok(regex) => Matcher::Pattern(regex),
                Err(e) => {
                    tracing::debug!(query = %sanitized, error = %e, "search query is not a valid pattern, matching literally");
                    Matcher::Literal(sanitized.to_lowercase())
                }
            }
        };

        Self {
            query: sanitized,
            matcher,
        }
    }

    /// The query after sanitizing.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the query filters anything at all.
    pub fn is_active(&self) -> bool {
        !matches!(self.matcher, Matcher::All)
    }

    /// Whether the query fell back to literal matching.
    pub fn is_literal(&self) -> bool {
        matches!(self.matcher, Matcher::Literal(_))
    }

    /// Test a single product name.
    pub fn matches(&self, name: &str) -> bool {
        match &self.matcher {
            Matcher::All => true,
            Matcher::Pattern(regex) => regex.is_match(name),
            Matcher::Literal(needle) => name.to_lowercase().contains(needle.as_str()),
        }
    }

    /// Keep the matching products, in catalog order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(&p.product_name))
            .cloned()
            .collect()
    }
}

/// Filter `products` by `query` in one step.
pub fn filter_products(query: &str, products: &[Product]) -> Vec<Product> {
    SearchFilter::new(query).apply(products)
}

fn sanitize(query: &str) -> String {
    query.chars().filter(|c| *c != '*').collect()
}
