//! # Models
//!
//! This module contains the data models read from the GitHub REST API.
//!
//! Only the fields needed to build a stats card are kept. Field names follow the
//! upstream JSON so the models can be passed through to API consumers unchanged.
//! Values GitHub may omit are `Option`s; defaults are chosen by whoever displays them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Represents the public profile of a GitHub user account.
///
/// # Examples
///
/// ```
/// use github_client::models::UserProfile;
///
/// let profile: UserProfile = serde_json::from_str(
///     r#"{"login": "octocat", "name": "The Octocat", "bio": null,
///         "avatar_url": "https://avatars.githubusercontent.com/u/583231",
///         "followers": 4523, "following": 9, "public_repos": 8}"#,
/// ).unwrap();
///
/// assert_eq!(profile.login, "octocat");
/// assert!(profile.bio.is_none());
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct UserProfile {
    /// The login name (handle) of the user
    pub login: String,
    /// The display name, if the user has set one
    pub name: Option<String>,
    /// The biography text, if the user has set one
    pub bio: Option<String>,
    /// URL of the avatar image
    #[serde(default)]
    pub avatar_url: String,
    /// Number of accounts following this user
    pub followers: u64,
    /// Number of accounts this user follows
    pub following: u64,
    /// Number of public repositories owned by this user
    pub public_repos: u64,
}

/// Summary of a single repository as returned by the repository listing endpoint.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct RepositorySummary {
    /// Repository name (without owner)
    pub name: String,
    /// Repository description, if any
    pub description: Option<String>,
    /// Number of stargazers
    pub stargazers_count: u64,
    /// Number of forks
    pub forks_count: u64,
    /// Number of open issues (including pull requests)
    pub open_issues_count: u64,
    /// Primary language detected by GitHub, if any
    pub language: Option<String>,
    /// Last time the repository was updated
    pub updated_at: DateTime<Utc>,
}
