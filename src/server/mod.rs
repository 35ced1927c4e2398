//! MCP server exposing post search.
//!
//! This module provides the MCP protocol server that exposes the search
//! engine to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::PostSearchServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the post search server with stdio transport.
///
/// This function starts the MCP server and runs it until completion.
/// It communicates via stdin/stdout using the MCP protocol.
pub async fn run_server(server: PostSearchServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
