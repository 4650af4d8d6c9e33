//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrl, UrlRecord, Visit};
use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, map_sqlx_error};

/// PostgreSQL repository for URL records and visit events.
///
/// Queries are bound at runtime (`query_as`/`query_scalar`) so the crate
/// builds without a live database.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlRecord>, AppError> {
        sqlx::query_as::<_, UrlRecord>(
            "SELECT id, slug, long_url, created_at FROM urls WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error("fetch slug", e))
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlRecord>, AppError> {
        sqlx::query_as::<_, UrlRecord>(
            "SELECT id, slug, long_url, created_at FROM urls WHERE long_url = $1",
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error("fetch long url", e))
    }

    async fn insert(&self, new_url: NewUrl) -> Result<UrlRecord, AppError> {
        sqlx::query_as::<_, UrlRecord>(
            r#"
            INSERT INTO urls (slug, long_url)
            VALUES ($1, $2)
            RETURNING id, slug, long_url, created_at
            "#,
        )
        .bind(&new_url.slug)
        .bind(&new_url.long_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error("create url", e))
    }

    async fn record_visit(&self, url_id: i64) -> Result<Visit, AppError> {
        sqlx::query_as::<_, Visit>(
            r#"
            INSERT INTO visits (url_id)
            VALUES ($1)
            RETURNING id, url_id, visited_at
            "#,
        )
        .bind(url_id)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error("create visit", e))
    }
}
