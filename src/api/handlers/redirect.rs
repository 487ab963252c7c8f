//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use metrics::counter;
use serde_json::json;
use std::net::SocketAddr;
use tokio::sync::mpsc::error::TrySendError;
use tracing::warn;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /links/{code}`
///
/// # Request Flow
///
/// 1. Resolve the code through the link service (cache first, then database)
/// 2. Enqueue a click event for the background worker
/// 3. Return 302 Found with the target in `Location`
///
/// # Click Tracking
///
/// Click events are sent to a bounded channel without waiting. If the queue is
/// full or closed the click is dropped and counted; the redirect is unaffected.
///
/// # Errors
///
/// - **404 Not Found**: unknown short code
/// - **500 Internal Server Error**: cache miss followed by a database failure,
///   or a stored URL that cannot be sent as a `Location` header
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, AppError> {
    let resolved = state
        .link_service
        .resolve(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Link not found", json!({ "shortCode": &code })))?;

    // Non-ASCII bytes are accepted; control characters are not.
    let location = HeaderValue::from_bytes(resolved.original_url.as_bytes()).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "shortCode": &code }),
        )
    })?;

    let click_event = ClickEvent::new(
        resolved.link_id,
        code,
        Some(client_ip(&headers, addr, state.behind_proxy)),
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
    );

    if let Err(e) = state.click_sender.try_send(click_event) {
        counter!("clicks_dropped_total").increment(1);
        match e {
            TrySendError::Full(event) => {
                warn!(short_code = %event.short_code, "Click queue full, dropping click")
            }
            TrySendError::Closed(event) => {
                warn!(short_code = %event.short_code, "Click queue closed, dropping click")
            }
        }
    }

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
