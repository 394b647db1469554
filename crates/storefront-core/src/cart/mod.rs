//! Shopping cart module.
//!
//! Contains the shared cart store and its change subscriptions.

mod store;

pub use store::{CartStore, Subscription};
