//! Product catalog module.
//!
//! Contains the product record shared by the catalog and the cart.

mod product;

pub use product::{CartEntry, Product};
