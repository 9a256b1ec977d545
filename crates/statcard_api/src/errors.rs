//! Error handling and HTTP error conversion
//!
//! Every failure a handler can report is an [`ApiError`]. The conversion to an HTTP
//! response happens here, at the boundary, and produces an [`ErrorResponse`] body:
//!
//! ```json
//! { "error": "Invalid parameters", "details": { "username": ["Required"] } }
//! ```
//!
//! Aggregation failures are reported with a fixed message. Upstream details are
//! logged but never sent to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use statcard_core::StatsError;
use std::collections::BTreeMap;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Messages for each query parameter that failed validation.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Error body returned by every JSON error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,

    /// Additional context, currently the per-field validation messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Failure of an API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// One or more query parameters are missing or malformed.
    #[error("Invalid parameters")]
    Validation { details: FieldErrors },

    /// The requested card type is recognised but has no renderer.
    #[error("Stats type '{kind}' not yet implemented")]
    UnsupportedVariant { kind: String },

    /// Statistics could not be aggregated.
    #[error("Failed to fetch GitHub stats")]
    Stats(#[from] StatsError),
}

impl ApiError {
    /// Create a validation error for a single field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut details = FieldErrors::new();
        details.insert(field.into(), vec![message.into()]);
        ApiError::Validation { details }
    }

    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedVariant { .. } => StatusCode::NOT_IMPLEMENTED,
            ApiError::Stats(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn to_response_body(&self) -> ErrorResponse {
        let details = match self {
            ApiError::Validation { details } => serde_json::to_value(details).ok(),
            _ => None,
        };

        ErrorResponse {
            error: self.to_string(),
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log error server-side
        log_error(&self, status);

        (status, Json(self.to_response_body())).into_response()
    }
}

/// Log error with appropriate level based on HTTP status
fn log_error(error: &ApiError, status: StatusCode) {
    match error {
        ApiError::Stats(source) => {
            tracing::error!(
                status = %status,
                upstream_status = source.upstream_status(),
                error = %source,
                "API error: {}",
                error
            );
        }
        ApiError::Validation { details } => {
            tracing::warn!(status = %status, fields = ?details.keys().collect::<Vec<_>>(), "API error: {}", error);
        }
        ApiError::UnsupportedVariant { .. } => {
            tracing::warn!(status = %status, "API error: {}", error);
        }
    }
}
