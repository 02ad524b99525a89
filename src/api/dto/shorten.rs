//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// `url` is optional at the serde level so that a missing field surfaces as a
/// validation error with a readable message instead of a JSON rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(required(message = "Missing 'url' in request body"))]
    pub url: Option<String>,
}

/// Response for both newly created and reused short links.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
}
