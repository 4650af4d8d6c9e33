//! Cache service trait and error types.

use async_trait::async_trait;
use serde_json::Value;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Generic key-value cache with TTL over JSON payloads.
///
/// The adapter owns serialization: values go in and come out as
/// [`serde_json::Value`], stored as JSON text in the backing store. A stored
/// payload that is not valid JSON is returned as a JSON string value rather
/// than an error.
///
/// Implementations must be thread-safe and degrade gracefully: the store is
/// the source of truth and the cache is an optimization, so operation
/// failures are logged and absorbed rather than propagated (fail-open).
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed, production
/// - [`crate::infrastructure::cache::MemoryCache`] - in-process map, tests and dev
/// - [`crate::infrastructure::cache::NullCache`] - no-op, caching disabled
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a value by key.
    ///
    /// Returns `Ok(None)` on miss, expiry, or backend error (fail-open).
    async fn get(&self, key: &str) -> CacheResult<Option<Value>>;

    /// Stores a value under `key` with a TTL in seconds.
    ///
    /// `ttl_seconds = None` applies the implementation's default TTL.
    async fn set(&self, key: &str, value: &Value, ttl_seconds: Option<u64>) -> CacheResult<()>;

    /// Removes a key. A no-op when the key is already absent; never errors
    /// for that case.
    async fn delete(&self, key: &str) -> CacheResult<()>;

    /// Checks whether the cache backend is reachable.
    async fn health_check(&self) -> bool;
}
