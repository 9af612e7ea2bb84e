//! Store API client.
//!
//! The store API is an external REST service owning all orders and products.
//! This client only speaks its six endpoints; the admin panel keeps no data of
//! its own.
//!
//! # Endpoints
//!
//! ```text
//! GET    /api/orders          - List orders
//! POST   /api/create-order    - Create order
//! DELETE /api/order           - Delete order (JSON body: { "id": ... })
//! GET    /api/products        - List products
//! POST   /api/products        - Create product
//! DELETE /api/products/{id}   - Delete product
//! ```
//!
//! # Success contract
//!
//! Every call succeeds iff the response status is 2xx. Mutation response
//! bodies are not interpreted.
//!
//! # Example
//!
//! ```rust,ignore
//! use tienda_costa_admin::api::StoreApiClient;
//!
//! let client = StoreApiClient::new(&config.api)?;
//!
//! let orders = client.list_orders().await?;
//! client.delete_product(&EntityId::from(42)).await?;
//! ```

mod orders;
mod products;

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::warn;

use crate::config::ApiConfig;

/// Errors that can occur when talking to the store API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// HTTP status returned by the API, if it answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(_) | Self::Parse(_) => None,
        }
    }
}

/// Store API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct StoreApiClient {
    inner: Arc<StoreApiClientInner>,
}

struct StoreApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl StoreApiClient {
    /// Create a new store API client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            inner: Arc::new(StoreApiClientInner {
                client,
                base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
            }),
        })
    }

    /// Base URL requests are sent to (without trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Execute a GET request and parse the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.inner.client.get(self.url(path)).send().await?;
        let response = Self::ensure_success(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("Failed to parse response: {e}")))
    }

    /// Execute a GET request for a JSON array and decode each element.
    ///
    /// Elements that do not decode are logged and skipped, so one malformed
    /// record does not hide the rest of the collection.
    async fn get_records<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let values: Vec<serde_json::Value> = self.get_json(path).await?;
        Ok(decode_records(path, values))
    }

    /// Execute a POST request with a JSON body.
    async fn post_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await?;

        Self::ensure_success(response).await.map(drop)
    }

    /// Execute a DELETE request, optionally with a JSON body.
    async fn delete<B: Serialize + Sync>(&self, path: &str, body: Option<&B>) -> Result<(), ApiError> {
        let mut request = self.inner.client.delete(self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::ensure_success(response).await.map(drop)
    }

    /// Turn a non-2xx response into an [`ApiError::Api`].
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

fn decode_records<T: DeserializeOwned>(path: &str, values: Vec<serde_json::Value>) -> Vec<T> {
    let total = values.len();
    let records: Vec<T> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            serde_json::from_value(value)
                .inspect_err(|e| warn!(path, index, error = %e, "Skipping undecodable record"))
                .ok()
        })
        .collect();

    if records.len() < total {
        warn!(path, total, decoded = records.len(), "Some records were skipped");
    }
    records
}

impl std::fmt::Debug for StoreApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreApiClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let config = ApiConfig::new("http://127.0.0.1:9000/").expect("valid url");
        let client = StoreApiClient::new(&config).expect("client builds");
        assert_eq!(client.base_url(), "http://127.0.0.1:9000");
        assert_eq!(client.url("/api/orders"), "http://127.0.0.1:9000/api/orders");
    }

    #[test]
    fn test_decode_records_skips_records_without_id() {
        let values = vec![
            serde_json::json!({"id": 1, "name": "Mug", "price": "7.5"}),
            serde_json::json!({"name": "No id"}),
            serde_json::json!({"id": 2, "name": null, "price": ""}),
        ];

        let products: Vec<tienda_costa_core::Product> = decode_records("/api/products", values);

        let ids: Vec<String> = products.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_api_error_status() {
        let err = ApiError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "API error: 500 - boom");
        assert_eq!(ApiError::Parse("bad".to_string()).status(), None);
    }
}
