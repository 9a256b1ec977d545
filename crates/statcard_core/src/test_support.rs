//! Shared fakes for unit tests.

use crate::cache::Clock;
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use github_client::{Error, RepositorySummary, UserProfile, UserStatsClient};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()),
        }
    }
}

impl ManualClock {
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub fn profile(login: &str) -> UserProfile {
    UserProfile {
        login: login.to_string(),
        name: Some("The Octocat".to_string()),
        bio: None,
        avatar_url: format!("https://avatars.githubusercontent.com/{login}"),
        followers: 4523,
        following: 9,
        public_repos: 8,
    }
}

pub fn repo(name: &str, stars: u64, forks: u64, language: Option<&str>) -> RepositorySummary {
    RepositorySummary {
        name: name.to_string(),
        description: None,
        stargazers_count: stars,
        forks_count: forks,
        open_issues_count: 0,
        language: language.map(str::to_string),
        updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
    }
}

/// In-memory [`UserStatsClient`] that counts how often it is called.
pub struct FakeStatsClient {
    pub profile: Result<UserProfile, u16>,
    pub repositories: Result<Vec<RepositorySummary>, u16>,
    pub delay: Option<std::time::Duration>,
    pub profile_calls: AtomicUsize,
    pub repository_calls: AtomicUsize,
}

impl FakeStatsClient {
    pub fn new(profile: UserProfile, repositories: Vec<RepositorySummary>) -> Self {
        Self {
            profile: Ok(profile),
            repositories: Ok(repositories),
            delay: None,
            profile_calls: AtomicUsize::new(0),
            repository_calls: AtomicUsize::new(0),
        }
    }

    pub fn profile_calls(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
    }

    pub fn repository_calls(&self) -> usize {
        self.repository_calls.load(Ordering::SeqCst)
    }
}

fn status_error(status: u16) -> Error {
    Error::Status {
        status,
        message: "fake failure".to_string(),
    }
}

#[async_trait]
impl UserStatsClient for FakeStatsClient {
    async fn get_user_profile(&self, _handle: &str) -> Result<UserProfile, Error> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.profile.clone().map_err(status_error)
    }

    async fn list_user_repositories(
        &self,
        _handle: &str,
    ) -> Result<Vec<RepositorySummary>, Error> {
        self.repository_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.repositories.clone().map_err(status_error)
    }
}

/// [`UserStatsClient`] whose calls never complete.
#[derive(Default)]
pub struct HangingClient {
    pub calls: AtomicUsize,
}

#[async_trait]
impl UserStatsClient for HangingClient {
    async fn get_user_profile(&self, _handle: &str) -> Result<UserProfile, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::pending().await
    }

    async fn list_user_repositories(
        &self,
        _handle: &str,
    ) -> Result<Vec<RepositorySummary>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::pending().await
    }
}
