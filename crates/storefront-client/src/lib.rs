//! HTTP access to the storefront backend.
//!
//! This crate provides:
//! - `HttpClient` - One request per call, JSON in and out
//! - `FetchError` - Transport, status and body failures
//! - `StorefrontApi` - The catalog/cart operations the app needs
//! - `HttpStorefrontApi` - `StorefrontApi` over REST endpoints

mod api;
mod client;

pub use api::*;
pub use client::*;
