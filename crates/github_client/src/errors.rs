//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when reading user profiles and
//! repository listings from the GitHub REST API. The upstream HTTP status is preserved
//! whenever GitHub answered, so callers can report exactly what went wrong.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::Error;
///
/// match client.get_user_profile("octocat").await {
///     Ok(profile) => println!("{} has {} followers", profile.login, profile.followers),
///     Err(Error::Status { status, .. }) => eprintln!("GitHub answered with {status}"),
///     Err(err) => eprintln!("Other error: {err}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// GitHub client initialization failure.
    ///
    /// This error occurs when the client cannot be built, for example because the
    /// configured base URI is not a valid URI.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// Error deserializing the response from GitHub.
    ///
    /// This error occurs when the GitHub API returns a body that cannot be parsed
    /// into the expected profile or repository structure.
    #[error("Failed to deserialize GitHub response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// GitHub answered with a non-success status code.
    ///
    /// A `404` means the handle does not exist. A `403` usually means the anonymous
    /// rate limit has been reached.
    #[error("GitHub API returned HTTP {status}: {message}")]
    Status {
        /// The HTTP status code returned by GitHub
        status: u16,
        /// The message GitHub included in the error body
        message: String,
    },

    /// The request never produced an HTTP response (DNS, TLS, connection reset, ...).
    #[error("Failed to reach the GitHub API: {0}")]
    Transport(String),
}

impl Error {
    /// Returns the upstream HTTP status code, if GitHub answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
