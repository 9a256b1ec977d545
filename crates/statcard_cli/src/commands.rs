//! Subcommand implementations and the shared upstream setup.

use secrecy::SecretString;
use statcard_core::StatsAggregator;
use std::env;
use std::sync::Arc;

use github_client::{create_client, GitHubClient, DEFAULT_API_URL};

use crate::errors::Error;

pub mod render_cmd;
pub mod stats_cmd;

#[cfg(test)]
mod test_support;

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;

pub const GITHUB_API_URL_VAR: &str = "GITHUB_API_URL";
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Upstream settings read from the environment.
#[derive(Debug)]
pub struct UpstreamSettings {
    pub api_url: String,
    pub token: Option<SecretString>,
}

impl UpstreamSettings {
    /// Reads `GITHUB_API_URL` and `GITHUB_TOKEN`; empty values count as unset.
    pub fn from_env() -> Self {
        let read = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());

        Self {
            api_url: read(GITHUB_API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token: read(GITHUB_TOKEN_VAR).map(SecretString::from),
        }
    }
}

/// Builds an aggregator talking to the GitHub API described by `settings`.
///
/// A one-shot command makes a single fetch, so the cache window only needs to
/// cover the current invocation.
pub fn build_aggregator(settings: &UpstreamSettings) -> Result<StatsAggregator, Error> {
    let octocrab = create_client(&settings.api_url, settings.token.as_ref())?;
    let client = GitHubClient::new(octocrab);

    Ok(StatsAggregator::with_ttl(
        Arc::new(client),
        statcard_core::DEFAULT_CACHE_TTL_SECS,
    ))
}

/// Rejects handles the HTTP endpoints would also reject.
pub fn check_username(username: &str) -> Result<(), Error> {
    let problems = statcard_core::validate_username(Some(username));
    if problems.is_empty() {
        return Ok(());
    }

    Err(Error::InvalidUsername {
        username: username.to_string(),
        reason: problems.join("; "),
    })
}
