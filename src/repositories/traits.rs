use crate::error::StoreApiResult;
use crate::models::Post;
use async_trait::async_trait;

/// Repository for reading posts.
///
/// Provides abstraction over post retrieval, enabling different
/// implementations (store client, mock).
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Retrieve one page of posts.
    ///
    /// A page shorter than `limit` marks the end of the collection.
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Post>>;
}
