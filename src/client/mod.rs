//! HTTP client for the document store holding the posts.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication, error mapping,
//! and offset pagination for the store's collection API.

mod async_wrapper;
pub use async_wrapper::{AsyncStoreClient, AsyncStoreClientImpl};

use crate::config::Config;
use crate::error::{StoreApiError, StoreApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::Post;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Response wrapper for the collection documents endpoint.
#[derive(Debug, Deserialize)]
pub struct DocumentsResponse {
    /// Posts on this page
    #[serde(default)]
    pub documents: Vec<Post>,
}

/// HTTP client for the document store.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct StoreClient {
    /// Base URL for the store API
    base_url: String,

    /// API key for bearer authentication
    api_key: String,

    /// Collection holding the posts
    collection: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl StoreClient {
    /// Create a new StoreClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.store_api_url.clone(),
            api_key: config.store_api_key.clone(),
            collection: config.collection.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a StoreClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String, collection: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            collection,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Share an existing metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> Result<ureq::Response, StoreApiError> {
        let timer = HttpTimer::new(self.metrics.clone());
        let url = self.build_url(path);

        tracing::debug!("GET {}", url);

        let result = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Accept", "application/json")
            .call()
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(_) => timer.complete(),
            Err(e) => {
                tracing::error!("GET {} - Error: {}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Map a ureq error to a StoreApiError.
    fn map_error(&self, error: ureq::Error) -> StoreApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 => StoreApiError::Unauthorized,
                    404 => StoreApiError::NotFound(message),
                    429 => StoreApiError::RateLimitExceeded,
                    _ => StoreApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    StoreApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    StoreApiError::Timeout
                } else {
                    StoreApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Fetch one page of posts from the collection.
    ///
    /// # Arguments
    /// * `limit` - Maximum number of posts to return, must be positive
    /// * `offset` - Number of posts to skip
    pub fn list_posts(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Post>> {
        if limit == 0 {
            return Err(StoreApiError::InvalidRequest(
                "limit must be greater than zero".to_string(),
            ));
        }

        let path = format!(
            "/collections/{}/documents?limit={}&offset={}",
            urlencoding::encode(&self.collection),
            limit,
            offset
        );
        let response = self.get(&path)?;
        let body = response
            .into_string()
            .map_err(|e| StoreApiError::HttpError(e.to_string()))?;

        let documents: DocumentsResponse = serde_json::from_str(&body)?;

        self.metrics.record_posts_fetched(documents.documents.len());
        Ok(documents.documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> StoreClient {
        StoreClient::with_base_url(
            base.to_string(),
            "test-key".to_string(),
            "post-v3".to_string(),
        )
    }

    #[test]
    fn test_build_url() {
        let client = client("https://store.example.com");
        assert_eq!(
            client.build_url("/collections"),
            "https://store.example.com/collections"
        );
        assert_eq!(
            client.build_url("collections"),
            "https://store.example.com/collections"
        );

        let client_with_slash = self::client("https://store.example.com/");
        assert_eq!(
            client_with_slash.build_url("/collections"),
            "https://store.example.com/collections"
        );
    }

    #[test]
    fn test_client_creation() {
        let config = Config {
            store_api_url: "https://store.example.com".to_string(),
            store_api_key: "test-key-123".to_string(),
            ..Config::default()
        };

        let client = StoreClient::new(&config);
        assert_eq!(client.base_url, "https://store.example.com");
        assert_eq!(client.api_key, "test-key-123");
        assert_eq!(client.collection, "post-v3");
    }

    #[test]
    fn test_zero_limit_is_rejected_without_request() {
        let client = client("http://127.0.0.1:9");
        let result = client.list_posts(0, 0);
        assert!(matches!(result, Err(StoreApiError::InvalidRequest(_))));
        assert_eq!(client.metrics().http_requests_total(), 0);
    }

    #[test]
    fn test_documents_response_defaults() {
        let parsed: DocumentsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.documents.is_empty());
    }
}
