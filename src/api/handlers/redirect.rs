//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL and counts the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with **302 Found** and a `Location` header equal to the stored URL.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mapping = state.link_service.resolve(&code).await?;

    debug!(code = %code, clicks = mapping.clicks, "Redirecting");

    let location = HeaderValue::try_from(mapping.original_url)
        .map_err(|e| AppError::internal(format!("Stored URL is not a valid header: {}", e)))?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
