//! Post Search - full-text search with highlighted snippets, served over MCP.
//!
//! A query is matched against every post's title and body. Literal,
//! case-insensitive matches are returned when any exist; otherwise a fuzzy
//! tier finds approximate matches. Every match is turned into a snippet that
//! carries the highlighted text and its character offsets.
//!
//! # Architecture
//!
//! - **models**: The `Post` document shape
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the document store
//! - **repositories**: Post access abstraction over the client
//! - **search**: Exact tier, snippet builder, result assembler and pipeline
//! - **matching**: Fuzzy tier and the similarity engine seam
//! - **metrics**: Request and search tier counters
//! - **tools**: MCP tool implementations
//! - **server**: MCP protocol server

pub mod client;
pub mod config;
pub mod error;
pub mod matching;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod search;
pub mod server;
pub mod tools;

pub use client::StoreClient;
pub use config::Config;
pub use error::{ConfigError, MatchingError, SearchError, StoreApiError};
pub use matching::{FuzzyMatcher, FuzzyOptions, SimilarityEngine};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::Post;
pub use search::{
    SearchEngine, SearchOutcome, SearchQuery, SearchResult, SearchSettings, SearchTier, Snippet,
};
pub use server::PostSearchServer;
pub use tools::{SearchParams, SearchResponse, SearchTools};
