//! Service configuration loaded from the environment.
//!
//! | variable | default |
//! |---|---|
//! | `API_HOST` | `0.0.0.0` |
//! | `API_PORT` | `8080` |
//! | `GITHUB_API_URL` | `https://api.github.com` |
//! | `GITHUB_TOKEN` | unset (anonymous) |
//! | `STATS_CACHE_TTL_SECS` | `3600` |
//!
//! Unset or empty variables take their default. Values that are set but cannot be
//! parsed are reported as a [`ConfigError`].

use secrecy::SecretString;
use std::env;
use std::str::FromStr;

use crate::server::ApiConfig;
use crate::DEFAULT_PORT;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

pub const API_HOST_VAR: &str = "API_HOST";
pub const API_PORT_VAR: &str = "API_PORT";
pub const GITHUB_API_URL_VAR: &str = "GITHUB_API_URL";
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const CACHE_TTL_VAR: &str = "STATS_CACHE_TTL_SECS";

/// Configuration could not be loaded.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {variable}: {reason}")]
    InvalidValue {
        variable: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the server binary needs to start.
#[derive(Debug)]
pub struct ServiceConfig {
    /// Bind address
    pub api: ApiConfig,

    /// Base URI of the GitHub REST API
    pub github_api_url: String,

    /// Token sent as a bearer credential to GitHub, if any
    pub github_token: Option<SecretString>,

    /// Lifetime of cached statistics in seconds
    pub cache_ttl_secs: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            github_api_url: github_client::DEFAULT_API_URL.to_string(),
            github_token: None,
            cache_ttl_secs: statcard_core::DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl ServiceConfig {
    /// Reads the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when `API_PORT` or `STATS_CACHE_TTL_SECS`
    /// is set to something that is not a number in range.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = read_var(API_HOST_VAR).unwrap_or(defaults.api.host);
        let port = parse_var(API_PORT_VAR)?.unwrap_or(DEFAULT_PORT);
        let github_api_url = read_var(GITHUB_API_URL_VAR).unwrap_or(defaults.github_api_url);
        let github_token = read_var(GITHUB_TOKEN_VAR).map(SecretString::from);
        let cache_ttl_secs = parse_var(CACHE_TTL_VAR)?.unwrap_or(defaults.cache_ttl_secs);

        Ok(Self {
            api: ApiConfig { port, host },
            github_api_url,
            github_token,
            cache_ttl_secs,
        })
    }
}

fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_var<T>(name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = read_var(name) else {
        return Ok(None);
    };

    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|e| ConfigError::InvalidValue {
            variable: name,
            value: raw.clone(),
            reason: e.to_string(),
        })
}
