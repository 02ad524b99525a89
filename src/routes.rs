//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Service status
//! - `GET  /{code}`  - Short link redirect
//! - `/api/*`        - JSON API (see [`crate::api::routes`])
//!
//! Trailing slashes are trimmed before routing, and every request is traced.

use crate::api;
use crate::api::handlers::{redirect_handler, root_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// All routes with request tracing, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
