//! Shared fakes for handler and route tests.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use github_client::{Error, RepositorySummary, UserProfile, UserStatsClient};
use statcard_core::{StatsAggregator, DEFAULT_CACHE_TTL_SECS};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::AppState;

/// Client that knows exactly one user, `octocat`, and answers 404 for everyone else.
#[derive(Default)]
pub struct OctocatClient {
    pub calls: AtomicUsize,
}

impl OctocatClient {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn not_found() -> Error {
    Error::Status {
        status: 404,
        message: "Not Found".to_string(),
    }
}

pub fn octocat_profile() -> UserProfile {
    UserProfile {
        login: "octocat".to_string(),
        name: Some("The Octocat".to_string()),
        bio: None,
        avatar_url: "https://avatars.githubusercontent.com/u/583231".to_string(),
        followers: 4523,
        following: 9,
        public_repos: 8,
    }
}

pub fn octocat_repositories() -> Vec<RepositorySummary> {
    let updated_at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    vec![
        RepositorySummary {
            name: "Hello-World".to_string(),
            description: Some("My first repository on GitHub!".to_string()),
            stargazers_count: 2500,
            forks_count: 2000,
            open_issues_count: 1200,
            language: None,
            updated_at,
        },
        RepositorySummary {
            name: "linguist".to_string(),
            description: None,
            stargazers_count: 345,
            forks_count: 150,
            open_issues_count: 3,
            language: Some("Ruby".to_string()),
            updated_at,
        },
    ]
}

#[async_trait]
impl UserStatsClient for OctocatClient {
    async fn get_user_profile(&self, handle: &str) -> Result<UserProfile, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if handle == "octocat" {
            Ok(octocat_profile())
        } else {
            Err(not_found())
        }
    }

    async fn list_user_repositories(
        &self,
        handle: &str,
    ) -> Result<Vec<RepositorySummary>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if handle == "octocat" {
            Ok(octocat_repositories())
        } else {
            Err(not_found())
        }
    }
}

/// App state over a fresh [`OctocatClient`], returned alongside for call counting.
pub fn test_app_state() -> (AppState, Arc<OctocatClient>) {
    let client = Arc::new(OctocatClient::default());
    let aggregator = StatsAggregator::with_ttl(client.clone(), DEFAULT_CACHE_TTL_SECS);
    (AppState::new(Arc::new(aggregator)), client)
}

/// Client whose calls never complete.
pub struct HangingClient;

#[async_trait]
impl UserStatsClient for HangingClient {
    async fn get_user_profile(&self, _handle: &str) -> Result<UserProfile, Error> {
        std::future::pending().await
    }

    async fn list_user_repositories(
        &self,
        _handle: &str,
    ) -> Result<Vec<RepositorySummary>, Error> {
        std::future::pending().await
    }
}

/// App state whose upstream never answers.
pub fn hanging_app_state() -> AppState {
    let aggregator = StatsAggregator::with_ttl(Arc::new(HangingClient), DEFAULT_CACHE_TTL_SECS);
    AppState::new(Arc::new(aggregator))
}
