//! Caching layer for slug resolution and cached aggregates.
//!
//! Provides a [`CacheService`] trait with three implementations:
//! - [`RedisCache`] - Production Redis-backed cache
//! - [`MemoryCache`] - In-process map with TTL for tests and development
//! - [`NullCache`] - No-op implementation for disabled caching

mod memory_cache;
mod null_cache;
mod redis_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};

/// Cache key for the precomputed most-visited list.
///
/// The resolution service is the sole invalidator of this key; the reporting
/// service reads and repopulates it. Both must agree on the literal.
pub const TOP_URLS_CACHE_KEY: &str = "top_n_slugs";

/// TTL for individual slug resolution entries: one day.
pub const SLUG_CACHE_TTL_SECONDS: u64 = 60 * 60 * 24;

/// Builds the cache key for a slug resolution entry.
pub fn slug_cache_key(slug: &str) -> String {
    format!("slug:{}", slug)
}
