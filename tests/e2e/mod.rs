//! End-to-end test utilities and shared configuration.
//!
//! This module provides common setup and assertions for E2E tests that
//! interact with a live document store.

use post_search::{Post, SearchResult, StoreClient};
use std::env;

/// Test configuration loaded from environment variables.
pub struct TestConfig {
    pub api_key: String,
    pub base_url: String,
    pub collection: String,
}

impl TestConfig {
    /// Load configuration from .env file.
    ///
    /// # Panics
    /// Panics if STORE_API_KEY or STORE_API_BASE_URL is not set.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_key: env::var("STORE_API_KEY")
                .expect("STORE_API_KEY must be set in .env file for E2E tests"),
            base_url: env::var("STORE_API_BASE_URL")
                .expect("STORE_API_BASE_URL must be set in .env file for E2E tests"),
            collection: env::var("STORE_COLLECTION").unwrap_or_else(|_| "post-v3".to_string()),
        }
    }
}

/// Create a StoreClient configured for testing.
pub fn setup_test_client() -> StoreClient {
    let config = TestConfig::from_env();
    StoreClient::with_base_url(config.base_url, config.api_key, config.collection)
}

/// Assert that a post has valid required fields.
#[allow(dead_code)]
pub fn assert_post_valid(post: &Post) {
    assert!(!post.id.is_empty(), "Post ID should not be empty");
}

/// Assert every snippet's highlight is the text at its recorded offsets.
#[allow(dead_code)]
pub fn assert_highlights_consistent(result: &SearchResult, post: &Post) {
    for snippet in &result.snippets {
        let source = if snippet.is_title {
            post.title_text()
        } else {
            post.content_text()
        };
        let expected: String = source
            .chars()
            .skip(snippet.position.start)
            .take(snippet.position.end - snippet.position.start + 1)
            .collect();
        assert_eq!(
            snippet.highlight, expected,
            "highlight should match source text for post {}",
            post.id
        );
    }
}
