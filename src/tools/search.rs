//! Search tools for full-text search over posts.
//!
//! Each call fetches a fresh snapshot of the collection and runs the two-tier
//! search engine over it. Nothing is cached between calls.

use crate::error::SearchError;
use crate::metrics::Metrics;
use crate::models::Post;
use crate::repositories::PostRepository;
use crate::search::{SearchEngine, SearchQuery, SearchResult, SearchSettings, SearchTier};
use std::sync::Arc;

/// Posts requested per store page.
const PAGE_SIZE: usize = 100;

/// Search tools for performing full-text searches.
#[derive(Clone)]
pub struct SearchTools {
    post_repo: Arc<dyn PostRepository>,
    settings: SearchSettings,
    metrics: Metrics,
}

/// Parameters for full-text search.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Search query string; missing or blank queries are rejected
    pub query: Option<String>,
}

/// Response from search with tier metadata.
#[derive(Debug, Clone)]
pub struct SearchResponse {
    /// Trimmed query that was searched
    pub query: String,

    /// Tier that produced the results
    pub tier: SearchTier,

    /// Search results
    pub results: Vec<SearchResult>,

    /// Number of posts searched
    pub corpus_size: usize,

    /// Posts skipped by the fuzzy tier after engine failures
    pub skipped_documents: usize,
}

impl SearchTools {
    /// Create new search tools.
    ///
    /// # Arguments
    /// * `post_repo` - PostRepository for post data access
    /// * `settings` - Snippet and fuzzy tuning
    pub fn new(post_repo: Arc<dyn PostRepository>, settings: SearchSettings) -> Self {
        Self {
            post_repo,
            settings,
            metrics: Metrics::new(),
        }
    }

    /// Share an existing metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Perform a full-text search.
    ///
    /// The query is validated before the store is contacted.
    pub async fn search_posts(&self, params: SearchParams) -> Result<SearchResponse, SearchError> {
        let query = SearchQuery::parse(params.query.as_deref())?;

        let start = std::time::Instant::now();
        let corpus = self.fetch_all_posts().await.map_err(|e| {
            tracing::error!("Failed to fetch posts: {}", e);
            e
        })?;

        let mut engine = SearchEngine::new(&self.settings).with_metrics(self.metrics.clone());
        let outcome = engine.search(&query, &corpus);

        tracing::info!(
            "Search for {:?} matched {} of {} posts ({:?} tier) in {}ms",
            query.as_str(),
            outcome.results.len(),
            corpus.len(),
            outcome.tier,
            start.elapsed().as_millis()
        );

        Ok(SearchResponse {
            query: query.as_str().to_string(),
            tier: outcome.tier,
            results: outcome.results,
            corpus_size: corpus.len(),
            skipped_documents: outcome.skipped_documents,
        })
    }

    /// Fetch all posts with pagination.
    async fn fetch_all_posts(&self) -> Result<Vec<Post>, SearchError> {
        let mut all_posts = Vec::new();
        let mut offset = 0;

        loop {
            let posts = self.post_repo.list(PAGE_SIZE, offset).await?;

            let count = posts.len();
            all_posts.extend(posts);

            if count < PAGE_SIZE {
                break;
            }
            offset += PAGE_SIZE;
        }

        tracing::debug!("Fetched {} posts", all_posts.len());
        Ok(all_posts)
    }
}
