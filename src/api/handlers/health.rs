//! Handlers for liveness endpoints.
//!
//! Both are static and never touch the store.

use axum::Json;

use crate::api::dto::health::{HealthResponse, ServiceStatus};

/// `GET /`
pub async fn root_handler() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "healthy",
        service: "URL Shortener API",
    })
}

/// Returns API liveness status.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response
///
/// ```json
/// { "status": "ok", "message": "URL Shortener API is running", "version": "0.1.0" }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "URL Shortener API is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}
