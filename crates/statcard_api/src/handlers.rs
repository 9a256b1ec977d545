//! HTTP request handlers
//!
//! Each handler:
//! 1. Extracts and validates the query string
//! 2. Calls the aggregator or the card renderer
//! 3. Translates the result to an HTTP response
//!
//! Validation failures and unimplemented card types are returned as JSON errors on
//! both endpoints. Aggregation failures are a JSON `500` on `/api/stats` and an
//! error card on `/api/image`.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use statcard_core::AggregateResult;

use crate::{
    errors::ApiError,
    models::{HealthCheckResponse, ImageQuery, ImageType, StatsQuery},
    AppState,
};

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";
pub const IMAGE_CACHE_CONTROL: &str = "public, max-age=3600";

/// GET /api/stats?username=
///
/// Returns the aggregated statistics for a user as JSON.
pub async fn get_stats(
    State(state): State<AppState>,
    query: Result<Query<StatsQuery>, QueryRejection>,
) -> Result<Json<AggregateResult>, ApiError> {
    let Query(query) = query.map_err(query_error)?;
    let username = query.validate()?;

    let stats = state.aggregator.fetch_stats(&username).await?;

    Ok(Json(stats))
}

/// GET /api/image?username=&theme=&type=
///
/// Returns an SVG card. Only the `user` type has a renderer.
pub async fn get_image(
    State(state): State<AppState>,
    query: Result<Query<ImageQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(query_error)?;
    let request = query.validate()?;

    let svg = match request.card_type {
        ImageType::User => {
            card_renderer::render_user_card(&state.aggregator, &request.username, &request.theme)
                .await
        }
        other => {
            return Err(ApiError::UnsupportedVariant {
                kind: other.to_string(),
            })
        }
    };

    Ok((
        [
            (header::CONTENT_TYPE, SVG_CONTENT_TYPE),
            (header::CACHE_CONTROL, IMAGE_CACHE_CONTROL),
        ],
        svg,
    )
        .into_response())
}

/// Reports a query string that could not be decoded, such as a repeated parameter.
fn query_error(rejection: QueryRejection) -> ApiError {
    ApiError::validation("query", rejection.body_text())
}

/// GET /api/health
///
/// Returns service health status with version and timestamp.
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse::healthy())
}
