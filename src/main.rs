//! Post Search - Main entry point
//!
//! Runs the MCP server over stdio, exposing full-text search across the posts
//! of a document store collection.

use anyhow::Result;
use post_search::client::{AsyncStoreClient, AsyncStoreClientImpl};
use post_search::repositories::{PostRepository, StorePostRepository};
use post_search::{Config, Metrics, PostSearchServer, StoreClient};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over the configured LOG_LEVEL
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // stderr only, stdout carries the MCP protocol
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting post search server with store URL: {} (collection {})",
        config.store_api_url, config.collection
    );

    let metrics = Metrics::new();

    let sync_client = StoreClient::new(&config).with_metrics(metrics.clone());
    let client = Arc::new(AsyncStoreClientImpl::new(sync_client)) as Arc<dyn AsyncStoreClient>;

    let post_repo = Arc::new(StorePostRepository::new(client)) as Arc<dyn PostRepository>;

    let server = PostSearchServer::new(post_repo, config.search_settings(), metrics.clone());

    info!("Starting MCP server with stdio transport");
    post_search::server::run_server(server).await?;

    let summary = metrics.summary();
    info!(
        "Post search server shutdown complete ({} requests, {} exact searches, {} fuzzy fallbacks)",
        summary.http_requests_total, summary.exact_searches_total, summary.fuzzy_fallbacks_total
    );
    Ok(())
}
