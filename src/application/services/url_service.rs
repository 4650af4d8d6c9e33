//! URL creation and cache-aside slug resolution.

use std::sync::Arc;

use serde_json::json;
use tracing::warn;

use crate::application::services::SlugAllocator;
use crate::domain::entities::{NewUrl, ResolvedUrl, UrlRecord};
use crate::domain::repositories::{SequenceRepository, UrlRepository};
use crate::error::AppError;
use crate::infrastructure::cache::{
    CacheService, SLUG_CACHE_TTL_SECONDS, TOP_URLS_CACHE_KEY, slug_cache_key,
};

/// Service orchestrating URL creation and slug resolution.
///
/// Creation is idempotent per long URL; resolution is cache-aside with visit
/// recording, and invalidates the cached top-N list on every successful
/// visit since visit counts feed that aggregate.
///
/// Cache write and invalidation failures on the resolution path are logged
/// and swallowed: the store is the source of truth and the entry TTL bounds
/// any staleness a failed invalidation leaves behind.
pub struct UrlService<R: UrlRepository, S: SequenceRepository> {
    url_repository: Arc<R>,
    allocator: SlugAllocator<S>,
    cache: Arc<dyn CacheService>,
}

impl<R: UrlRepository, S: SequenceRepository> UrlService<R, S> {
    /// Creates a new URL service.
    pub fn new(
        url_repository: Arc<R>,
        sequence_repository: Arc<S>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            url_repository,
            allocator: SlugAllocator::new(sequence_repository),
            cache,
        }
    }

    /// Returns the existing record for `long_url`, or allocates a slug and
    /// creates one.
    ///
    /// The existence check and the insert are not atomic as a pair; the
    /// `urls.long_url` uniqueness constraint closes the gap. When a
    /// concurrent caller wins the insert race, the resulting conflict is
    /// resolved by re-fetching and returning that caller's record. The slug
    /// allocated for the losing insert is discarded; the counter never moves
    /// backwards.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Creation`] when allocation or insertion fails at
    /// the store (partial writes are rolled back by the store), and
    /// [`AppError::Validation`] when the counter exhausts the encodable range.
    pub async fn create_or_get(&self, long_url: &str) -> Result<UrlRecord, AppError> {
        if let Some(existing) = self.url_repository.find_by_long_url(long_url).await? {
            return Ok(existing);
        }

        let slug = self.allocator.allocate().await.map_err(wrap_creation)?;

        let new_url = NewUrl {
            slug,
            long_url: long_url.to_string(),
        };

        match self.url_repository.insert(new_url).await {
            Ok(record) => Ok(record),
            Err(AppError::Conflict { .. }) => {
                // Lost a create race on the same long URL: return the winner.
                self.url_repository
                    .find_by_long_url(long_url)
                    .await?
                    .ok_or_else(|| {
                        AppError::creation(
                            "Failed to create short URL",
                            json!({ "long_url": long_url }),
                        )
                    })
            }
            Err(e) => Err(wrap_creation(e)),
        }
    }

    /// Resolves a slug to its URL and records the visit.
    ///
    /// Cache hit: the view is rebuilt from the cached entry with no store
    /// read, the visit is recorded, and the top-N key is invalidated.
    ///
    /// Cache miss: the store is queried; on a match the visit is recorded
    /// first, then the cache entry is populated (24h TTL) and the top-N key
    /// invalidated.
    ///
    /// `Ok(None)` for an unknown slug; no visit is recorded and the cache is
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] when the lookup or visit insert fails.
    pub async fn resolve_and_record(&self, slug: &str) -> Result<Option<ResolvedUrl>, AppError> {
        let cache_key = slug_cache_key(slug);

        if let Ok(Some(value)) = self.cache.get(&cache_key).await {
            match serde_json::from_value::<ResolvedUrl>(value) {
                Ok(cached) => {
                    self.url_repository.record_visit(cached.id).await?;
                    self.invalidate_top_urls().await;
                    return Ok(Some(cached));
                }
                Err(e) => {
                    // Malformed entry; fall through to the store.
                    warn!("Discarding undecodable cache entry {}: {}", cache_key, e);
                }
            }
        }

        let Some(record) = self.url_repository.find_by_slug(slug).await? else {
            return Ok(None);
        };

        self.url_repository.record_visit(record.id).await?;

        let resolved = ResolvedUrl::from(&record);
        match serde_json::to_value(&resolved) {
            Ok(value) => {
                if let Err(e) = self
                    .cache
                    .set(&cache_key, &value, Some(SLUG_CACHE_TTL_SECONDS))
                    .await
                {
                    warn!("Failed to cache {}: {}", cache_key, e);
                }
            }
            Err(e) => warn!("Failed to serialize cache entry {}: {}", cache_key, e),
        }
        self.invalidate_top_urls().await;

        Ok(Some(resolved))
    }

    /// Drops the cached top-N list. Best-effort.
    async fn invalidate_top_urls(&self) {
        if let Err(e) = self.cache.delete(TOP_URLS_CACHE_KEY).await {
            warn!("Failed to invalidate {}: {}", TOP_URLS_CACHE_KEY, e);
        }
    }
}

/// Store failures during create-or-get surface as creation errors.
fn wrap_creation(e: AppError) -> AppError {
    match e {
        AppError::Store { message, details } => AppError::Creation { message, details },
        other => other,
    }
}
