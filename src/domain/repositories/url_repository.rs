//! Repository trait for URL record and visit storage.

use crate::domain::entities::{NewUrl, UrlRecord, Visit};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for URL records and visit events.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds a URL record by its slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a URL record by exact long URL match.
    ///
    /// Used to check whether a URL has already been shortened.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Inserts a new URL record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug or long URL already exists,
    /// [`AppError::Store`] on other database errors.
    async fn insert(&self, new_url: NewUrl) -> Result<UrlRecord, AppError>;

    /// Appends a visit record for the given URL id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn record_visit(&self, url_id: i64) -> Result<Visit, AppError>;
}
