//! API route configuration.

use crate::api::handlers::{analytics_handler, create_link_handler, redirect_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link routes.
///
/// # Endpoints
///
/// - `POST /links`                  - Create a short link
/// - `GET  /links/{code}`           - Redirect to the original URL
/// - `GET  /links/{code}/analytics` - Click counts by region and device
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler))
        .route("/links/{code}", get(redirect_handler))
        .route("/links/{code}/analytics", get(analytics_handler))
}
