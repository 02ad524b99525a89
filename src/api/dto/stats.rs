//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlMapping;

/// Click statistics for a single short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl From<UrlMapping> for StatsResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            url: mapping.original_url,
            clicks: mapping.clicks,
            created_at: mapping.created_at,
        }
    }
}
