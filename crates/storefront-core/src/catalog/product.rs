//! Product records.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product in the catalog, exactly as the backend serves it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Backend identifier.
    pub id_product: ProductId,
    /// Display name, also the search target.
    pub product_name: String,
    /// Unit price in the store currency.
    pub price: f64,
}

impl Product {
    /// Create a product.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id_product: id.into(),
            product_name: name.into(),
            price,
        }
    }

    /// Format the price followed by a currency label, e.g. `10 руб.`.
    pub fn price_display(&self, currency: &str) -> String {
        format!("{} {}", self.price, currency)
    }
}

/// An entry in the cart.
///
/// Entries have no quantity: buying the same product twice yields two
/// equal entries.
pub type CartEntry = Product;
