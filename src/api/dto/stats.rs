//! DTOs for visit statistics endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::repositories::UrlStats;

/// Query parameters for the top-N listing.
#[derive(Debug, Deserialize)]
pub struct TopUrlsParams {
    pub limit: Option<i64>,
}

/// Visit statistics for a single URL.
#[derive(Debug, Serialize)]
pub struct UrlStatsResponse {
    pub slug: String,
    pub long_url: String,
    pub visits: i64,
    pub last_visit: Option<DateTime<Utc>>,
}

impl From<UrlStats> for UrlStatsResponse {
    fn from(stats: UrlStats) -> Self {
        Self {
            slug: stats.slug,
            long_url: stats.long_url,
            visits: stats.visits,
            last_visit: stats.last_visit,
        }
    }
}
