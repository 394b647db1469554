//! Search module.
//!
//! Derives the visible catalog from a free-text query.

mod filter;

pub use filter::{filter_products, SearchFilter};
