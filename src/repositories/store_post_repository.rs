use crate::client::AsyncStoreClient;
use crate::error::StoreApiResult;
use crate::models::Post;
use crate::repositories::traits::PostRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Post repository backed by the document store client.
///
/// This repository delegates to the AsyncStoreClient, keeping the search
/// tools independent of the underlying HTTP client.
pub struct StorePostRepository {
    client: Arc<dyn AsyncStoreClient>,
}

impl StorePostRepository {
    /// Create a new StorePostRepository with the given client.
    pub fn new(client: Arc<dyn AsyncStoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PostRepository for StorePostRepository {
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Post>> {
        self.client.list_posts(limit, offset).await
    }
}
