//! Fake upstream shared by the command tests.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use github_client::{Error, RepositorySummary, UserProfile, UserStatsClient};
use statcard_core::StatsAggregator;
use std::sync::Arc;

struct OctocatOnly;

#[async_trait]
impl UserStatsClient for OctocatOnly {
    async fn get_user_profile(&self, handle: &str) -> Result<UserProfile, Error> {
        if handle != "octocat" {
            return Err(Error::Status {
                status: 404,
                message: "Not Found".to_string(),
            });
        }
        Ok(UserProfile {
            login: "octocat".to_string(),
            name: Some("The Octocat".to_string()),
            bio: None,
            avatar_url: String::new(),
            followers: 4523,
            following: 9,
            public_repos: 8,
        })
    }

    async fn list_user_repositories(
        &self,
        _handle: &str,
    ) -> Result<Vec<RepositorySummary>, Error> {
        Ok(vec![RepositorySummary {
            name: "Hello-World".to_string(),
            description: None,
            stargazers_count: 2845,
            forks_count: 2150,
            open_issues_count: 0,
            language: Some("Ruby".to_string()),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        }])
    }
}

pub fn octocat_aggregator() -> StatsAggregator {
    StatsAggregator::with_ttl(Arc::new(OctocatOnly), statcard_core::DEFAULT_CACHE_TTL_SECS)
}
