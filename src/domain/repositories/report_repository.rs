//! Repository trait for visit statistics.

use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated visit statistics for a single URL.
///
/// Serializable because the top-N list is cached as a JSON blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UrlStats {
    pub slug: String,
    pub long_url: String,
    pub visits: i64,
    pub last_visit: Option<DateTime<Utc>>,
}

/// Repository interface for visit count aggregates.
///
/// Read-only over the same tables the resolution path writes; the resolution
/// service invalidates the cached top-N list whenever those tables change.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgReportRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Returns visit stats for one slug: total count and most recent visit.
    ///
    /// `Ok(None)` when the slug does not exist or has no visits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn stats_for_slug(&self, slug: &str) -> Result<Option<UrlStats>, AppError>;

    /// Returns the most-visited URLs, ordered by visit count descending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn top_urls(&self, limit: i64) -> Result<Vec<UrlStats>, AppError>;
}
