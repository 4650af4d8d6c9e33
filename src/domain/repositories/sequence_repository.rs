//! Repository trait for the slug sequence counter.

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the singleton slug sequence counter.
///
/// The counter is the serialization point for slug allocation: every call to
/// [`SequenceRepository::next_value`] must observe and persist the counter
/// under an exclusive row lock so that no two callers, however concurrent,
/// receive the same value.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSequenceRepository`] -
///   `SELECT ... FOR UPDATE` inside a single transaction
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SequenceRepository: Send + Sync {
    /// Atomically increments the counter and returns the new value.
    ///
    /// The counter starts at 0, so the first call returns 1.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors; the counter is left
    /// unchanged (the enclosing transaction rolls back).
    async fn next_value(&self) -> Result<i64, AppError>;
}
