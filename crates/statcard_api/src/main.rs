//! statcard REST API Server
//!
//! Main binary for running the API server in production or development.
//!
//! # Environment Variables
//!
//! - `API_PORT`: Port to listen on (default: 8080)
//! - `API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `GITHUB_API_URL`: GitHub REST API base (default: https://api.github.com)
//! - `GITHUB_TOKEN`: Token for authenticated GitHub requests (default: anonymous)
//! - `STATS_CACHE_TTL_SECS`: Lifetime of cached statistics (default: 3600)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::sync::Arc;

use github_client::{create_client, GitHubClient};
use statcard_api::{ApiServer, AppState, ServiceConfig, API_VERSION};
use statcard_core::StatsAggregator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    // Load configuration from environment
    let config = ServiceConfig::from_env()?;

    let octocrab = create_client(&config.github_api_url, config.github_token.as_ref())?;
    let client = GitHubClient::new(octocrab);
    let aggregator = StatsAggregator::with_ttl(Arc::new(client), config.cache_ttl_secs);

    tracing::info!("Starting statcard API server");
    tracing::info!("API version: {}", API_VERSION);
    tracing::info!(
        github_api_url = %config.github_api_url,
        authenticated = config.github_token.is_some(),
        cache_ttl_secs = config.cache_ttl_secs,
        "Upstream configuration"
    );

    let state = AppState::new(Arc::new(aggregator));
    let server = ApiServer::new(config.api, state);

    // Start server with graceful shutdown
    server.serve().await
}
