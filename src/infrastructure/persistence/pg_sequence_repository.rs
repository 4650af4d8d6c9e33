//! PostgreSQL implementation of the sequence counter repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::SequenceRepository;
use crate::error::{AppError, map_sqlx_error};

/// PostgreSQL-backed slug sequence counter.
///
/// The counter lives in the singleton `slug_sequence` row, seeded at 0 by
/// the initial migration and pinned to `id = 1` by a check constraint. Each
/// call to [`SequenceRepository::next_value`] opens one transaction, takes
/// an exclusive row lock with `SELECT ... FOR UPDATE`, writes the
/// incremented value, and commits. Concurrent allocators block on the lock
/// until the holding transaction commits or rolls back, so no two callers
/// can observe the same counter value.
pub struct PgSequenceRepository {
    pool: Arc<PgPool>,
}

impl PgSequenceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SequenceRepository for PgSequenceRepository {
    async fn next_value(&self) -> Result<i64, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("begin sequence transaction", e))?;

        let current: i64 =
            sqlx::query_scalar("SELECT current_value FROM slug_sequence WHERE id = 1 FOR UPDATE")
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| map_sqlx_error("fetch sequence", e))?;

        let next = current + 1;

        sqlx::query("UPDATE slug_sequence SET current_value = $1 WHERE id = 1")
            .bind(next)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("set sequence", e))?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("commit sequence", e))?;

        Ok(next)
    }
}
