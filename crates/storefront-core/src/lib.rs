//! Client-side state for the storefront.
//!
//! This crate provides the pieces every view of the store shares:
//!
//! - **Catalog**: `Product` and `CartEntry` as the backend sends them
//! - **Search**: case-insensitive filtering of the catalog by free text
//! - **Cart**: a shared, observable `CartStore`
//!
//! # Example
//!
//! ```rust
//! use storefront_core::prelude::*;
//!
//! let catalog = vec![
//!     Product::new(1, "Apple", 10.0),
//!     Product::new(2, "Banana", 5.0),
//! ];
//!
//! let visible = filter_products("an", &catalog);
//! assert_eq!(visible.len(), 1);
//!
//! let cart = CartStore::new();
//! cart.add(visible[0].clone());
//! assert_eq!(cart.len(), 1);
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod cart;
pub mod search;

pub use cart::{CartStore, Subscription};
pub use catalog::{CartEntry, Product};
pub use error::StoreError;
pub use ids::ProductId;
pub use search::{filter_products, SearchFilter};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::ProductId;

    pub use crate::catalog::{CartEntry, Product};

    pub use crate::cart::{CartStore, Subscription};

    pub use crate::search::{filter_products, SearchFilter};
}
