//! In-process cache implementation backed by a HashMap.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

struct Entry {
    value: Value,
    expires_at: Option<Instant>,
}

/// A process-local cache with per-key TTL.
///
/// Stands in for Redis in unit tests and single-process development runs.
/// Expired entries are dropped lazily on read; there is no background
/// eviction, so this is not suitable for unbounded key sets.
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<Value>> {
        let mut entries = self.entries.lock().await;

        if let Some(entry) = entries.get(key) {
            if entry.expires_at.is_some_and(|at| Instant::now() >= at) {
                entries.remove(key);
                return Ok(None);
            }
            return Ok(Some(entry.value.clone()));
        }

        Ok(None)
    }

    async fn set(&self, key: &str, value: &Value, ttl_seconds: Option<u64>) -> CacheResult<()> {
        let expires_at = ttl_seconds.map(|ttl| Instant::now() + Duration::from_secs(ttl));

        self.entries.lock().await.insert(
            key.to_string(),
            Entry {
                value: value.clone(),
                expires_at,
            },
        );

        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.entries.lock().await.remove(key);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_set_get_delete() {
        let cache = MemoryCache::new();

        cache.set("k", &json!({"id": 1}), None).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), Some(json!({"id": 1})));

        cache.delete("k").await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_absent_key_is_noop() {
        let cache = MemoryCache::new();
        assert!(cache.delete("never-set").await.is_ok());
    }

    #[tokio::test]
    async fn test_zero_ttl_expires_immediately() {
        let cache = MemoryCache::new();

        cache.set("k", &json!("v"), Some(0)).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_no_ttl_does_not_expire() {
        let cache = MemoryCache::new();

        cache.set("k", &json!("v"), None).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), Some(json!("v")));
    }
}
