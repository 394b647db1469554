//! Thin JSON-over-HTTP facade.

use http::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http {
        status: u16,
        url: String,
        /// Raw response body, as the server sent it.
        body: String,
    },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),
}

impl FetchError {
    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// JSON client bound to one API base URL.
///
/// Each call issues exactly one request. A 2xx answer resolves with the
/// parsed body (an empty body parses as `null`); anything else is an error.
/// There is no retry, no timeout and no cancellation.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    inner: reqwest::Client,
}

impl HttpClient {
    /// Create a client for `base_url`, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_client(base_url: impl Into<String>, inner: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, inner }
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `path` against the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// `GET path`.
    pub async fn get(&self, path: &str) -> Result<Value, FetchError> {
        self.send(Method::GET, path, None).await
    }

    /// `GET path`, decoded into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let value = self.get(path).await?;
        serde_json::from_value(value).map_err(|e| FetchError::Deserialization(e.to_string()))
    }

    /// `POST path` with a JSON body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, FetchError> {
        let body = serde_json::to_vec(body).map_err(|e| FetchError::Request(e.to_string()))?;
        self.send(Method::POST, path, Some(body)).await
    }

    /// `DELETE path`.
    pub async fn delete(&self, path: &str) -> Result<Value, FetchError> {
        self.send(Method::DELETE, path, None).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Value, FetchError> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "sending request");

        let mut request = self.inner.request(method.clone(), &url);
        if let Some(body) = body {
            request = request
                .header(http::header::CONTENT_TYPE, "application/json; charset=UTF-8")
                .body(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_builder() {
                FetchError::Request(e.to_string())
            } else {
                FetchError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(%method, %url, status = status.as_u16(), "request failed");
            return Err(FetchError::Http {
                status: status.as_u16(),
                url,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| FetchError::Deserialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = HttpClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url("/catalog"), "http://localhost:3000/catalog");
        assert_eq!(client.url("cart/1"), "http://localhost:3000/cart/1");
    }

    #[test]
    fn test_status_accessor() {
        let err = FetchError::Http {
            status: 404,
            url: "http://x/catalog".to_string(),
            body: "nope".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(FetchError::Transport("refused".to_string()).status(), None);
    }
}
