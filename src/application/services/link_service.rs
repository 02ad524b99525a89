//! Link shortening and lookup service.

use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{MappingRepository, ShortenOutcome};
use crate::error::AppError;
use crate::utils::url_validator::is_valid_url;

/// Service for creating short links and looking them up.
///
/// Validates URLs before they reach the store and turns missing codes into
/// [`AppError::NotFound`].
pub struct LinkService<R: MappingRepository> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: MappingRepository> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public origin prepended to codes in short URLs.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Shortens `long_url`, reusing the existing code if it was shortened before.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL lacks a scheme or host.
    pub async fn shorten(&self, long_url: &str) -> Result<ShortenOutcome, AppError> {
        if !is_valid_url(long_url) {
            return Err(AppError::bad_request("Invalid URL provided"));
        }

        Ok(self.repository.shorten(long_url).await)
    }

    /// Resolves a code for redirection, counting one click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn resolve(&self, short_code: &str) -> Result<UrlMapping, AppError> {
        self.repository
            .resolve(short_code)
            .await
            .ok_or_else(|| AppError::not_found("Short link not found"))
    }

    /// Returns the mapping for a code without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn stats(&self, short_code: &str) -> Result<UrlMapping, AppError> {
        self.repository
            .stats(short_code)
            .await
            .ok_or_else(|| AppError::not_found("Short link not found"))
    }

    /// Number of stored links.
    pub async fn link_count(&self) -> usize {
        self.repository.len().await
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.base_url, short_code)
    }
}
