//! statcard REST API
//!
//! This crate exposes GitHub user statistics over HTTP:
//!
//! - `GET /api/stats?username=` returns the aggregated statistics as JSON
//! - `GET /api/image?username=&theme=&type=` returns an SVG stat card
//! - `GET /api/health` reports service health
//!
//! # Architecture
//!
//! This crate exists in the HTTP layer and handles:
//! - Query parameter validation
//! - Error mapping from domain to HTTP
//! - Routing and server configuration
//!
//! Data fetching and caching live in `statcard_core` and card templating in
//! `card_renderer`. Neither depends on this crate.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;

#[cfg(test)]
#[path = "test_support.rs"]
mod test_support;

use statcard_core::StatsAggregator;
use std::sync::Arc;

// Re-export key types for convenience
pub use config::{ConfigError, ServiceConfig};
pub use errors::{ApiError, ErrorResponse};
pub use models::{request, response};
pub use server::{ApiConfig, ApiServer};

/// API version
pub const API_VERSION: &str = "v1";

/// Default API port
pub const DEFAULT_PORT: u16 = 8080;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Aggregator shared by every request so its cache is shared too
    pub aggregator: Arc<StatsAggregator>,
}

impl AppState {
    /// Create new application state around `aggregator`.
    pub fn new(aggregator: Arc<StatsAggregator>) -> Self {
        Self { aggregator }
    }
}
