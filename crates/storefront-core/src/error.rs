//! Cart store error types.

use thiserror::Error;

/// Errors that can occur when mutating the cart store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Positional removal outside the current cart.
    #[error("Cart index {index} out of range (cart has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}
