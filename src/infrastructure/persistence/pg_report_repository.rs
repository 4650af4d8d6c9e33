//! PostgreSQL implementation of the report repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::{ReportRepository, UrlStats};
use crate::error::{AppError, map_sqlx_error};

/// PostgreSQL repository for visit count aggregates.
///
/// Inner-joins `visits`, so URLs that were never resolved do not appear in
/// either query.
pub struct PgReportRepository {
    pool: Arc<PgPool>,
}

impl PgReportRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn stats_for_slug(&self, slug: &str) -> Result<Option<UrlStats>, AppError> {
        sqlx::query_as::<_, UrlStats>(
            r#"
            SELECT u.slug, u.long_url,
                   COUNT(v.id) AS visits,
                   MAX(v.visited_at) AS last_visit
            FROM urls u
            JOIN visits v ON v.url_id = u.id
            WHERE u.slug = $1
            GROUP BY u.id
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error("fetch slug stats", e))
    }

    async fn top_urls(&self, limit: i64) -> Result<Vec<UrlStats>, AppError> {
        sqlx::query_as::<_, UrlStats>(
            r#"
            SELECT u.slug, u.long_url,
                   COUNT(v.id) AS visits,
                   MAX(v.visited_at) AS last_visit
            FROM urls u
            JOIN visits v ON v.url_id = u.id
            GROUP BY u.id
            ORDER BY visits DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error("fetch top urls", e))
    }
}
