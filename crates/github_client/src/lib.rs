//! Crate for reading public user data from the GitHub REST API.
//!
//! This crate provides a small client for the two calls a stats card needs: the user
//! profile and the most recently updated repositories of that user. Requests are
//! anonymous unless a personal access token is supplied, in which case it is sent as a
//! bearer token on every request.

use async_trait::async_trait;
use http::header::ACCEPT;
use http::StatusCode;
use octocrab::Octocrab;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, error, info, instrument, warn};

pub mod errors;
pub use errors::Error;

pub mod models;
pub use models::{RepositorySummary, UserProfile};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Base URI of the public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Media type requesting the versioned JSON representation.
pub const GITHUB_JSON_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Largest page size GitHub accepts for repository listings.
pub const MAX_REPOSITORIES_PER_PAGE: u8 = 100;

/// Characters left unescaped when a handle is placed in a request path.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

/// Error body GitHub sends with most non-success responses.
#[derive(Debug, Deserialize)]
struct GitHubErrorBody {
    message: String,
}

/// Trait for the upstream reads needed to build user statistics.
///
/// The aggregation logic depends on this trait rather than on [`GitHubClient`] so it
/// can be exercised without network access.
#[async_trait]
pub trait UserStatsClient: Send + Sync {
    /// Fetches the public profile for `handle`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Status` if GitHub answers with a non-success status, for
    /// example `404` when the user does not exist.
    async fn get_user_profile(&self, handle: &str) -> Result<UserProfile, Error>;

    /// Lists up to 100 repositories owned by `handle`, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns `Error::Status` if GitHub answers with a non-success status.
    async fn list_user_repositories(&self, handle: &str)
        -> Result<Vec<RepositorySummary>, Error>;
}

/// A client for interacting with the GitHub REST API.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` from a configured `Octocrab` instance.
    ///
    /// Use [`create_client`] to build an `Octocrab` instance with the expected
    /// headers and optional authentication.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

impl GitHubClient {
    /// Issues a GET for `uri` and decodes a successful body as `T`.
    ///
    /// The status is checked before the body is decoded, so any non-success
    /// response becomes `Error::Status` whatever its body looks like.
    async fn get_json<T: DeserializeOwned>(&self, uri: String, context: &str) -> Result<T, Error> {
        debug!("Making API call to: {}", uri);

        let response = self
            .client
            ._get(uri)
            .await
            .map_err(|e| map_octocrab_error(context, e))?;
        let status = response.status();

        let body = self
            .client
            .body_to_string(response)
            .await
            .map_err(|e| map_octocrab_error(context, e))?;

        if !status.is_success() {
            return Err(status_error(context, status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            error!(
                error_message = %e,
                "{}. The response could not be deserialized.", context
            );
            Error::Deserialization(e)
        })
    }
}

#[async_trait]
impl UserStatsClient for GitHubClient {
    #[instrument(skip(self), fields(handle = %handle))]
    async fn get_user_profile(&self, handle: &str) -> Result<UserProfile, Error> {
        let uri = format!("/users/{}", encode_handle(handle));

        let profile: UserProfile = self.get_json(uri, "Failed to get user profile").await?;

        info!(
            handle = handle,
            public_repos = profile.public_repos,
            "Retrieved user profile"
        );
        Ok(profile)
    }

    #[instrument(skip(self), fields(handle = %handle))]
    async fn list_user_repositories(
        &self,
        handle: &str,
    ) -> Result<Vec<RepositorySummary>, Error> {
        let uri = format!(
            "/users/{}/repos?per_page={}&sort=updated",
            encode_handle(handle),
            MAX_REPOSITORIES_PER_PAGE
        );

        let repositories: Vec<RepositorySummary> = self
            .get_json(uri, "Failed to list user repositories")
            .await?;

        info!(
            handle = handle,
            count = repositories.len(),
            "Retrieved user repositories"
        );
        Ok(repositories)
    }
}

/// Percent-encodes `handle` so it always occupies exactly one path segment.
fn encode_handle(handle: &str) -> String {
    utf8_percent_encode(handle, PATH_SEGMENT).to_string()
}

/// Creates an `Octocrab` client for the GitHub REST API.
///
/// Every request made by the client asks for the versioned JSON representation. When
/// `token` is provided it is attached to every request as a bearer token; otherwise
/// requests are anonymous and subject to the anonymous rate limit.
///
/// # Arguments
///
/// * `base_uri` - The API base URI, normally [`DEFAULT_API_URL`].
/// * `token` - An optional personal access token.
///
/// # Errors
///
/// Returns an `Error::AuthError` if the base URI is invalid or the client cannot be
/// built.
///
/// # Example
///
/// ```rust,no_run
/// use github_client::{create_client, GitHubClient, UserStatsClient, DEFAULT_API_URL};
///
/// #[tokio::main]
/// async fn main() -> Result<(), github_client::Error> {
///     let octocrab = create_client(DEFAULT_API_URL, None)?;
///     let client = GitHubClient::new(octocrab);
///
///     let profile = client.get_user_profile("octocat").await?;
///     println!("{} follows {} accounts", profile.login, profile.following);
///     Ok(())
/// }
/// ```
#[instrument(skip(token))]
pub fn create_client(base_uri: &str, token: Option<&SecretString>) -> Result<Octocrab, Error> {
    let mut builder = Octocrab::builder()
        .base_uri(base_uri)
        .map_err(|e| {
            error!(base_uri = base_uri, error = %e, "Invalid GitHub API base URI");
            Error::AuthError(format!("Invalid GitHub API base URI '{}': {}", base_uri, e))
        })?
        .add_header(ACCEPT, GITHUB_JSON_MEDIA_TYPE.to_string());

    match token {
        Some(token) => {
            debug!("Using personal access token for GitHub requests");
            builder = builder.personal_token(token.expose_secret().to_string());
        }
        None => {
            debug!("No GitHub token configured, requests will be anonymous");
        }
    }

    builder.build().map_err(|e| {
        error!(error = ?e, "Failed to build Octocrab client");
        Error::AuthError(format!("Failed to build GitHub client: {}", e))
    })
}

fn status_error(context: &str, status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<GitHubErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Unknown error").to_string());

    if status.is_client_error() {
        warn!(
            status = status.as_u16(),
            error_message = %message,
            "{}. Received an error from GitHub",
            context
        );
    } else {
        error!(
            status = status.as_u16(),
            error_message = %message,
            "{}. Received an error from GitHub",
            context
        );
    }

    Error::Status {
        status: status.as_u16(),
        message,
    }
}

fn map_octocrab_error(context: &str, e: octocrab::Error) -> Error {
    error!(error_message = %e, "{}", context);
    Error::Transport(e.to_string())
}
