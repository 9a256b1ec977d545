//! User statistics aggregation.
//!
//! [`StatsAggregator::fetch_stats`] reads the profile and the repository listing for a
//! handle, then derives totals and the language distribution from exactly that
//! listing. Results are cached per handle for the configured window.

use chrono::Duration;
use github_client::{RepositorySummary, UserProfile, UserStatsClient};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::cache::{Clock, SystemClock, TtlCache};
use crate::StatsError;

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;

/// Default lifetime of a cached aggregate.
pub const DEFAULT_CACHE_TTL_SECS: u32 = 3600;

/// Default upper bound on one `fetch_stats` call, including time spent waiting for a
/// concurrent fetch of the same handle. Kept below the HTTP server's request timeout.
pub const DEFAULT_FETCH_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(20);

/// Aggregated statistics for one user.
///
/// Serializes as:
///
/// ```json
/// {
///   "user": { "login": "octocat", "followers": 4523, ... },
///   "repos": [ { "name": "Hello-World", "stargazers_count": 2500, ... } ],
///   "totalStars": 2845,
///   "totalForks": 2150,
///   "languages": { "Ruby": 1 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    /// Profile of the user
    pub user: UserProfile,

    /// Repositories the totals were computed from
    pub repos: Vec<RepositorySummary>,

    /// Sum of stargazers over `repos`
    pub total_stars: u64,

    /// Sum of forks over `repos`
    pub total_forks: u64,

    /// Number of repositories per primary language
    pub languages: BTreeMap<String, u64>,
}

impl AggregateResult {
    /// Builds the aggregate for `user` from `repos`.
    pub fn from_parts(user: UserProfile, repos: Vec<RepositorySummary>) -> Self {
        let total_stars = repos.iter().map(|r| r.stargazers_count).sum();
        let total_forks = repos.iter().map(|r| r.forks_count).sum();
        let languages = count_languages(&repos);

        Self {
            user,
            repos,
            total_stars,
            total_forks,
            languages,
        }
    }
}

/// Counts repositories per primary language.
///
/// Repositories without a primary language are skipped.
pub fn count_languages(repos: &[RepositorySummary]) -> BTreeMap<String, u64> {
    let mut languages = BTreeMap::new();
    for language in repos.iter().filter_map(|r| r.language.as_deref()) {
        *languages.entry(language.to_string()).or_insert(0) += 1;
    }
    languages
}

/// Fetches and aggregates user statistics, caching results per handle.
pub struct StatsAggregator {
    client: Arc<dyn UserStatsClient>,
    cache: TtlCache<AggregateResult>,
    fetch_timeout: std::time::Duration,
}

impl StatsAggregator {
    /// Creates an aggregator over `client` that stores results in `cache`.
    pub fn new(client: Arc<dyn UserStatsClient>, cache: TtlCache<AggregateResult>) -> Self {
        Self {
            client,
            cache,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Replaces the deadline applied to each [`StatsAggregator::fetch_stats`] call.
    pub fn with_fetch_timeout(mut self, fetch_timeout: std::time::Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    /// Creates an aggregator with a wall-clock cache of `ttl_secs` seconds.
    pub fn with_ttl(client: Arc<dyn UserStatsClient>, ttl_secs: u32) -> Self {
        Self::with_clock(client, ttl_secs, Arc::new(SystemClock))
    }

    /// Creates an aggregator whose cache reads time from `clock`.
    pub fn with_clock(
        client: Arc<dyn UserStatsClient>,
        ttl_secs: u32,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let cache = TtlCache::new(Duration::seconds(i64::from(ttl_secs)), clock);
        Self::new(client, cache)
    }

    /// Returns the aggregate for `handle`, from cache when a live entry exists.
    ///
    /// The profile and repository calls are issued together and both must succeed.
    /// The caller is responsible for validating `handle`.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Upstream` with GitHub's status code when either call
    /// fails with a non-success response, and `StatsError::Transport` or
    /// `StatsError::Decode` when no usable response was received. A call that does
    /// not finish within the fetch timeout fails with `StatsError::Transport`.
    #[instrument(skip(self), fields(handle = %handle))]
    pub async fn fetch_stats(&self, handle: &str) -> Result<AggregateResult, StatsError> {
        let fetch = self
            .cache
            .get_or_try_insert_with(handle, || self.fetch_uncached(handle));

        // Dropping the fetch on expiry releases the slot lock with the slot still empty.
        match tokio::time::timeout(self.fetch_timeout, fetch).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    handle = handle,
                    timeout_ms = self.fetch_timeout.as_millis() as u64,
                    "Timed out fetching user statistics"
                );
                Err(StatsError::Transport(format!(
                    "timed out after {}s",
                    self.fetch_timeout.as_secs()
                )))
            }
        }
    }

    /// Drops expired cache entries.
    pub fn purge_cache(&self) {
        self.cache.purge_expired();
    }

    /// Number of handles with a live cached aggregate.
    pub fn cached_handles(&self) -> usize {
        self.cache.len()
    }

    async fn fetch_uncached(&self, handle: &str) -> Result<AggregateResult, StatsError> {
        let (user, repos) = tokio::try_join!(
            self.client.get_user_profile(handle),
            self.client.list_user_repositories(handle),
        )?;

        let result = AggregateResult::from_parts(user, repos);

        info!(
            handle = handle,
            repositories = result.repos.len(),
            total_stars = result.total_stars,
            total_forks = result.total_forks,
            languages = result.languages.len(),
            "Aggregated user statistics"
        );

        Ok(result)
    }
}
