//! Error types for the storefront app.

use std::path::PathBuf;

use storefront_client::FetchError;
use storefront_core::StoreError;
use thiserror::Error;

/// Errors that can occur while driving the storefront.
#[derive(Error, Debug)]
pub enum AppError {
    /// Backend request failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Cart store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Log subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Failed to serialize config: {0}")]
    Serialize(String),
}
