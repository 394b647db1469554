//! Storefront application state.
//!
//! `Storefront` owns the catalog, the search line and the error banner, and
//! shares the cart store with the cart view. It loads catalog and cart
//! together on mount and turns component intents into local state changes
//! plus detached backend writes.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use storefront_app::prelude::*;
//!
//! let config = StorefrontConfig::default();
//! let api = Rc::new(HttpStorefrontApi::from_base_url(&config.api.base_url));
//!
//! tokio::task::LocalSet::new()
//!     .run_until(async move {
//!         let mut app = Storefront::new(api, CartStore::new(), &config);
//!         app.mount().await.ok();
//!         app.set_search_line("an");
//!         println!("{}", app.render());
//!         app.settle().await;
//!     })
//!     .await;
//! ```

mod app;
mod banner;
mod config;
mod error;
mod logging;

pub use app::*;
pub use banner::*;
pub use config::*;
pub use error::*;
pub use logging::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        init_logging, AppError, ErrorBanner, Intent, LoadState, LogFormat, Storefront,
        StorefrontConfig,
    };
    pub use storefront_client::{HttpStorefrontApi, StorefrontApi};
    pub use storefront_core::prelude::*;
}
