//! MCP tools for searching posts.
//!
//! - **Search**: Two-tier full-text search with highlighted snippets

pub mod search;

pub use search::{SearchParams, SearchResponse, SearchTools};
