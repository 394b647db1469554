//! Typed catalog and cart endpoints.

use async_trait::async_trait;
use storefront_core::{CartEntry, Product};

use crate::client::{FetchError, HttpClient};

/// Catalog listing.
pub const CATALOG_PATH: &str = "/catalog";
/// Cart listing and additions.
pub const CART_PATH: &str = "/cart";

/// Path of the cart entry at `index`.
pub fn cart_entry_path(index: usize) -> String {
    format!("{}/{}", CART_PATH, index)
}

/// Backend operations the storefront depends on.
///
/// Futures are not required to be `Send`; the app drives them on its
/// single UI thread.
#[async_trait(?Send)]
pub trait StorefrontApi {
    /// Fetch the full catalog.
    async fn catalog(&self) -> Result<Vec<Product>, FetchError>;

    /// Fetch the server-side cart.
    async fn cart(&self) -> Result<Vec<CartEntry>, FetchError>;

    /// Append a product to the server-side cart.
    async fn add_to_cart(&self, product: &Product) -> Result<(), FetchError>;

    /// Remove the server-side cart entry at `index`.
    async fn remove_from_cart(&self, index: usize) -> Result<(), FetchError>;
}

/// `StorefrontApi` over the REST endpoints.
///
/// Acknowledgment bodies of writes are read and discarded.
#[derive(Debug, Clone)]
pub struct HttpStorefrontApi {
    client: HttpClient,
}

impl HttpStorefrontApi {
    /// Create an API over an existing client.
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Create an API for `base_url`.
    pub fn from_base_url(base_url: impl Into<String>) -> Self {
        Self::new(HttpClient::new(base_url))
    }

    /// The underlying HTTP client.
    pub fn client(&self) -> &HttpClient {
        &self.client
    }
}

#[async_trait(?Send)]
impl StorefrontApi for HttpStorefrontApi {
    async fn catalog(&self) -> Result<Vec<Product>, FetchError> {
        self.client.get_json(CATALOG_PATH).await
    }

    async fn cart(&self) -> Result<Vec<CartEntry>, FetchError> {
        self.client.get_json(CART_PATH).await
    }

    async fn add_to_cart(&self, product: &Product) -> Result<(), FetchError> {
        self.client.post(CART_PATH, product).await?;
        Ok(())
    }

    async fn remove_from_cart(&self, index: usize) -> Result<(), FetchError> {
        self.client.delete(&cart_entry_path(index)).await?;
        Ok(())
    }
}
