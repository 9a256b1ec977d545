//! # statcard core
//!
//! This crate computes the statistics shown on a GitHub profile card.
//!
//! ## Overview
//!
//! [`StatsAggregator::fetch_stats`] runs the whole pipeline for one handle:
//! 1. Fetch the user profile and the 100 most recently updated repositories
//! 2. Sum stars and forks over exactly that repository list
//! 3. Count repositories per primary language
//! 4. Cache the [`AggregateResult`] for the configured window
//!
//! ## Architecture
//!
//! Upstream access goes through the [`github_client::UserStatsClient`] trait and
//! caching through an injected [`cache::TtlCache`] with its own [`cache::Clock`], so
//! both can be replaced in tests.
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use github_client::{create_client, GitHubClient, DEFAULT_API_URL};
//! use statcard_core::{StatsAggregator, DEFAULT_CACHE_TTL_SECS};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GitHubClient::new(create_client(DEFAULT_API_URL, None)?);
//! let aggregator = StatsAggregator::with_ttl(Arc::new(client), DEFAULT_CACHE_TTL_SECS);
//!
//! let stats = aggregator.fetch_stats("octocat").await?;
//! println!("{} stars across {} repositories", stats.total_stars, stats.repos.len());
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod cache;
pub mod errors;
pub mod handle;

pub use aggregator::{
    count_languages, AggregateResult, StatsAggregator, DEFAULT_CACHE_TTL_SECS,
    DEFAULT_FETCH_TIMEOUT,
};
pub use cache::{Clock, SystemClock, TtlCache};
pub use errors::StatsError;
pub use handle::{validate_username, MAX_HANDLE_LENGTH};

#[cfg(test)]
#[path = "test_support.rs"]
mod test_support;
