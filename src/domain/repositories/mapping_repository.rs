//! Repository trait for the short code mapping store.

use crate::domain::entities::UrlMapping;
use async_trait::async_trait;

/// Outcome of a shorten call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenOutcome {
    pub mapping: UrlMapping,
    /// `false` when an existing mapping for the same URL was reused.
    pub created: bool,
}

/// Store of short code mappings.
///
/// Each method is one atomic operation with respect to every other call on
/// the same store. Callers never see or lock the underlying table.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryMappingRepository`] - process-local table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Returns the mapping for `long_url`, creating one if none exists.
    ///
    /// The URL is expected to be validated already; it is stored verbatim.
    /// Code allocation retries on collision until a free code is found.
    async fn shorten(&self, long_url: &str) -> ShortenOutcome;

    /// Looks up `short_code`, counting one click if it exists.
    ///
    /// Returns the record after the increment, or `None` if the code is unknown.
    async fn resolve(&self, short_code: &str) -> Option<UrlMapping>;

    /// Looks up `short_code` without modifying it.
    async fn stats(&self, short_code: &str) -> Option<UrlMapping>;

    /// Number of stored mappings.
    async fn len(&self) -> usize;
}
