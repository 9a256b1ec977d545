use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the statcard CLI application.
#[derive(Error, Debug)]
pub enum Error {
    /// The GitHub client could not be created.
    ///
    /// Returned when `GITHUB_API_URL` is not a valid URI or the client fails to
    /// initialise.
    #[error("Failed to create GitHub client: {0}")]
    Client(#[from] github_client::Error),

    /// The username given on the command line is not a valid GitHub handle.
    #[error("Invalid username '{username}': {reason}")]
    InvalidUsername { username: String, reason: String },

    /// Statistics for the requested user could not be loaded.
    #[error("Failed to fetch GitHub stats: {0}")]
    Stats(#[from] statcard_core::StatsError),

    /// The aggregate could not be serialized to JSON.
    #[error("Failed to serialize statistics: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The card could not be written to the requested file.
    #[error("Failed to write output file '{}': {source}", path.display())]
    WriteFile { path: PathBuf, source: io::Error },

    /// Writing to standard output failed.
    ///
    /// Typically caused by a closed pipe.
    #[error("Failed to write to stdout: {0}")]
    Stdout(io::Error),
}
