use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while aggregating user statistics.
///
/// Every variant is terminal for the request that produced it: nothing is retried and
/// failures are never cached.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// The profile or repository call returned a non-success status.
    #[error("GitHub API error: {status}")]
    Upstream {
        /// HTTP status code returned by GitHub
        status: u16,
    },

    /// The upstream API could not be reached.
    #[error("Failed to reach the GitHub API: {0}")]
    Transport(String),

    /// The upstream API answered with a body that could not be decoded.
    #[error("Failed to decode GitHub response: {0}")]
    Decode(String),
}

impl StatsError {
    /// Returns the upstream HTTP status, if GitHub answered at all.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            StatsError::Upstream { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<github_client::Error> for StatsError {
    fn from(err: github_client::Error) -> Self {
        match err {
            github_client::Error::Status { status, .. } => StatsError::Upstream { status },
            github_client::Error::Deserialization(e) => StatsError::Decode(e.to_string()),
            github_client::Error::Transport(message) => StatsError::Transport(message),
            github_client::Error::AuthError(message) => StatsError::Transport(message),
        }
    }
}
