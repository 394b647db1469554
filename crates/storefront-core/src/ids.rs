//! Product identifiers.
//!
//! The backend is free to send `id_product` either as a JSON number or as a
//! JSON string. `ProductId` keeps whichever shape arrived so that a product
//! posted back to the cart serializes exactly as it was received.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Identifier of a product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// Numeric identifier, e.g. `123`, `18446744073709551615` or `1.5`.
    Number(Number),
    /// Textual identifier, e.g. `"sku-123"`.
    Text(String),
}

impl ProductId {
    /// Parse an identifier typed by a user.
    ///
    /// Anything that parses as a JSON number becomes `Number`, the rest
    /// `Text`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<Number>() {
            Ok(n) => ProductId::Number(n),
            Err(_) => ProductId::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        ProductId::Number(n.into())
    }
}

impl From<u64> for ProductId {
    fn from(n: u64) -> Self {
        ProductId::Number(n.into())
    }
}

impl From<i32> for ProductId {
    fn from(n: i32) -> Self {
        ProductId::Number(n.into())
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId::Text(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        ProductId::Text(s)
    }
}
