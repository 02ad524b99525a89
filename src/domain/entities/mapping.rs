//! Mapping entity representing one shortened URL.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A short code and the URL it points to, with its click counter.
///
/// `original_url`, `short_code` and `created_at` never change after
/// creation. `clicks` only grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlMapping {
    pub original_url: String,
    pub short_code: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a fresh mapping with zero clicks, stamped with the current time.
    pub fn new(original_url: String, short_code: String) -> Self {
        Self {
            original_url,
            short_code,
            clicks: 0,
            created_at: Utc::now(),
        }
    }

    /// Counts one redirect.
    pub fn record_click(&mut self) {
        self.clicks = self.clicks.saturating_add(1);
    }
}
