//! Query parameters for the stats and image endpoints.

use serde::{Deserialize, Serialize};
use statcard_core::validate_username;
use std::fmt;

use crate::errors::{ApiError, FieldErrors};

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;

/// Query string of `GET /api/stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsQuery {
    pub username: Option<String>,
}

impl StatsQuery {
    /// Returns the validated handle.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` when `username` is missing or has the wrong length.
    pub fn validate(self) -> Result<String, ApiError> {
        let mut details = FieldErrors::new();
        let username = check_username(self.username, &mut details);

        match username {
            Some(username) if details.is_empty() => Ok(username),
            _ => Err(ApiError::Validation { details }),
        }
    }
}

/// Query string of `GET /api/image`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageQuery {
    pub username: Option<String>,

    /// Theme name; unknown names render with the dark theme
    pub theme: Option<String>,

    /// Card type; one of `user`, `repo`, `languages`, `contributions`
    #[serde(rename = "type")]
    pub card_type: Option<String>,
}

/// Validated image request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub username: String,
    pub theme: String,
    pub card_type: ImageType,
}

impl ImageQuery {
    /// Validates every parameter and reports all failures together.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` with one entry per failing parameter.
    pub fn validate(self) -> Result<ImageRequest, ApiError> {
        let mut details = FieldErrors::new();
        let username = check_username(self.username, &mut details);

        let card_type = match self.card_type.as_deref() {
            None | Some("") => Some(ImageType::default()),
            Some(raw) => {
                let parsed = ImageType::parse(raw);
                if parsed.is_none() {
                    details
                        .entry("type".to_string())
                        .or_default()
                        .push(invalid_enum_message(raw));
                }
                parsed
            }
        };

        let theme = self
            .theme
            .filter(|theme| !theme.is_empty())
            .unwrap_or_else(|| "dark".to_string());

        match (username, card_type) {
            (Some(username), Some(card_type)) if details.is_empty() => Ok(ImageRequest {
                username,
                theme,
                card_type,
            }),
            _ => Err(ApiError::Validation { details }),
        }
    }
}

/// Kind of card requested from the image endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageType {
    #[default]
    User,
    Repo,
    Languages,
    Contributions,
}

impl ImageType {
    pub const ALL: [ImageType; 4] = [
        ImageType::User,
        ImageType::Repo,
        ImageType::Languages,
        ImageType::Contributions,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImageType::User => "user",
            ImageType::Repo => "repo",
            ImageType::Languages => "languages",
            ImageType::Contributions => "contributions",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn check_username(username: Option<String>, details: &mut FieldErrors) -> Option<String> {
    let problems = validate_username(username.as_deref());
    if problems.is_empty() {
        username
    } else {
        details.insert("username".to_string(), problems);
        None
    }
}

fn invalid_enum_message(received: &str) -> String {
    let expected = ImageType::ALL
        .iter()
        .map(|t| format!("'{t}'"))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("Invalid enum value. Expected {expected}, received '{received}'")
}
