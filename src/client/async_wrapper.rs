//! Async wrapper around synchronous StoreClient.
//!
//! This module provides an async interface to the synchronous StoreClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::StoreClient;
use crate::error::{StoreApiError, StoreApiResult};
use crate::models::Post;
use async_trait::async_trait;
use std::sync::Arc;

/// Async store client operations.
#[async_trait]
pub trait AsyncStoreClient: Send + Sync {
    async fn list_posts(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Post>>;
}

/// Async wrapper around synchronous StoreClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool, preventing blocking
/// the async runtime.
#[derive(Clone)]
pub struct AsyncStoreClientImpl {
    client: Arc<StoreClient>,
}

impl AsyncStoreClientImpl {
    pub fn new(client: StoreClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncStoreClient for AsyncStoreClientImpl {
    async fn list_posts(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Post>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.list_posts(limit, offset))
            .await
            .map_err(|e| StoreApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
