//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_code": "aB3xY9", "short_url": "http://localhost:5000/aB3xY9" }
/// ```
///
/// - **201 Created**: a new short link was allocated
/// - **200 OK**: the URL was already shortened; the existing code is returned
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON, `url` is missing, or the
/// URL has no scheme or host.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    payload.validate()?;

    let long_url = payload
        .url
        .ok_or_else(|| AppError::bad_request("Missing 'url' in request body"))?;

    let outcome = state.link_service.shorten(&long_url).await?;

    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    let short_url = state.link_service.short_url(&outcome.mapping.short_code);

    Ok((
        status,
        Json(ShortenResponse {
            short_code: outcome.mapping.short_code,
            short_url,
        }),
    ))
}
