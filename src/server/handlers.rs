//! MCP tool handlers for the post search server.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.

use crate::error::SearchError;
use crate::metrics::Metrics;
use crate::repositories::PostRepository;
use crate::search::SearchSettings;
use crate::tools::{SearchParams, SearchTools};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes full-text search over posts.
#[derive(Clone)]
pub struct PostSearchServer {
    search_tools: Arc<SearchTools>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for PostSearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "post-search".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Full-text search over posts. Literal matches are returned when any exist; otherwise a fuzzy fallback is used. Each result carries highlighted snippets with character offsets.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchPostsParams {
    /// Text to search for in post titles and bodies
    #[serde(default)]
    query: Option<String>,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn search_error_to_mcp(e: SearchError) -> McpError {
    match e {
        SearchError::InvalidQuery(_) => McpError {
            code: ErrorCode::INVALID_PARAMS,
            message: Cow::from(e.to_string()),
            data: None,
        },
        other => to_mcp_error(other),
    }
}

// Tool router implementation
#[tool_router]
impl PostSearchServer {
    /// Create a new post search server.
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        settings: SearchSettings,
        metrics: Metrics,
    ) -> Self {
        let search_tools = SearchTools::new(post_repo, settings).with_metrics(metrics);

        Self {
            search_tools: Arc::new(search_tools),
            tool_router: Self::tool_router(),
        }
    }

    /// Search post titles and bodies.
    #[tool(
        description = "Search post titles and bodies. Returns every post containing the query literally (case-insensitive); when none do, falls back to fuzzy matching. Each result includes highlighted snippets with the matched text and its character position."
    )]
    async fn search_posts(
        &self,
        params: Parameters<SearchPostsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::debug!("MCP Handler: search_posts called with {:?}", params.query);

        let response = self
            .search_tools
            .search_posts(SearchParams {
                query: params.query,
            })
            .await
            .map_err(search_error_to_mcp)?;

        let response = serde_json::json!({
            "query": response.query,
            "tier": response.tier,
            "resultCount": response.results.len(),
            "results": response.results,
        });

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&response).map_err(to_mcp_error)?,
        )]))
    }
}
