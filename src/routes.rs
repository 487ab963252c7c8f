//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /links`                  - Create a short link
//! - `GET  /links/{code}`           - Redirect (302)
//! - `GET  /links/{code}/analytics` - Click summary
//! - `GET  /health`                 - Health check: DB, cache, click queue
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, the API carries no credentials
//! - **Path normalization** - Trailing slash handling, see [`normalize`]

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Handlers extract `ConnectInfo<SocketAddr>`, so the router must be served
/// with `into_make_service_with_connect_info`.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::link_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer())
}

/// Wraps the router so `/links/abc/` and `/links/abc` hit the same route.
///
/// Trailing slashes are trimmed before routing, which a layer added with
/// `Router::layer` cannot do.
pub fn normalize(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
