//! Handlers for link creation and analytics.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::analytics::AnalyticsResponse;
use crate::api::dto::link::{CreateLinkRequest, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /links`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// **201 Created**
///
/// ```json
/// {
///   "linkId": 1,
///   "shortCode": "Ab3dE9xZ",
///   "originalUrl": "https://example.com/some/long/path",
///   "createdAt": "2025-01-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: malformed JSON, missing or empty `originalUrl`,
///   scheme other than http/https, or a URL longer than 2048 characters
/// - **500 Internal Server Error**: database failure or no free short code found
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let original_url = payload.original_url.unwrap_or_default();
    let link = state.link_service.create_link(&original_url).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Returns click counts for a link grouped by region and device.
///
/// # Endpoint
///
/// `GET /links/{code}/analytics`
///
/// # Response
///
/// ```json
/// {
///   "total": 3,
///   "byRegion": { "DE": 1, "US": 2 },
///   "byDevice": { "desktop": 1, "mobile": 2 }
/// }
/// ```
///
/// # Errors
///
/// - **404 Not Found**: unknown short code
/// - **500 Internal Server Error**: database failure
pub async fn analytics_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let summary = state
        .analytics_service
        .get_analytics(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Link not found", json!({ "shortCode": code })))?;

    Ok(Json(summary.into()))
}
