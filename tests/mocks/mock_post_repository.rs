use async_trait::async_trait;
use post_search::error::{StoreApiError, StoreApiResult};
use post_search::models::Post;
use post_search::repositories::PostRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock post repository for testing.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockPostRepository {
    posts: Arc<Mutex<Vec<Post>>>,
    failure: Arc<Mutex<Option<u16>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockPostRepository {
    pub fn new() -> Self {
        Self {
            posts: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn add_post(&self, post: Post) {
        let mut posts = self.posts.lock().unwrap();
        posts.push(post);
    }

    pub fn add_posts(&self, posts_list: Vec<Post>) {
        let mut posts = self.posts.lock().unwrap();
        posts.extend(posts_list);
    }

    /// Make every subsequent `list` call fail with the given status.
    pub fn fail_with_status(&self, status: u16) {
        let mut failure = self.failure.lock().unwrap();
        *failure = Some(status);
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    pub fn clear(&self) {
        let mut posts = self.posts.lock().unwrap();
        posts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for MockPostRepository {
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Post>> {
        self.track_call("list");

        if let Some(status) = *self.failure.lock().unwrap() {
            return Err(match status {
                401 => StoreApiError::Unauthorized,
                429 => StoreApiError::RateLimitExceeded,
                _ => StoreApiError::ApiError {
                    status,
                    message: "mock failure".to_string(),
                },
            });
        }

        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().skip(offset).take(limit).cloned().collect())
    }
}
