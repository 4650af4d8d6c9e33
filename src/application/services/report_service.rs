//! Visit statistics reporting service.

use std::sync::Arc;

use tracing::warn;

use crate::domain::repositories::{ReportRepository, UrlStats};
use crate::error::AppError;
use crate::infrastructure::cache::{CacheService, TOP_URLS_CACHE_KEY};

/// Service for visit count aggregates.
///
/// `top_urls` is cache-aside on the shared top-N key: the resolution service
/// deletes that key on every recorded visit, so a cached list is never
/// staler than the last visit. The cached list ignores `limit`; whatever
/// limit populated it is what a hit returns, matching the write side.
pub struct ReportService<R: ReportRepository> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
}

impl<R: ReportRepository> ReportService<R> {
    /// Creates a new report service.
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Returns visit stats for one slug, or `None` when the slug is unknown
    /// or has never been visited.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn stats_for_slug(&self, slug: &str) -> Result<Option<UrlStats>, AppError> {
        self.repository.stats_for_slug(slug).await
    }

    /// Returns the most-visited URLs, serving from the top-N cache when
    /// populated and repopulating it after a store read.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn top_urls(&self, limit: i64) -> Result<Vec<UrlStats>, AppError> {
        if let Ok(Some(value)) = self.cache.get(TOP_URLS_CACHE_KEY).await {
            match serde_json::from_value::<Vec<UrlStats>>(value) {
                Ok(stats) => return Ok(stats),
                Err(e) => warn!("Discarding undecodable top-N cache entry: {}", e),
            }
        }

        let stats = self.repository.top_urls(limit).await?;

        match serde_json::to_value(&stats) {
            Ok(value) => {
                if let Err(e) = self.cache.set(TOP_URLS_CACHE_KEY, &value, None).await {
                    warn!("Failed to cache top-N list: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize top-N list: {}", e),
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockReportRepository;
    use crate::infrastructure::cache::MemoryCache;
    use chrono::Utc;

    fn stats(slug: &str, visits: i64) -> UrlStats {
        UrlStats {
            slug: slug.to_string(),
            long_url: format!("https://example.com/{}", slug),
            visits,
            last_visit: Some(Utc::now()),
        }
    }

    #[tokio::test]
    async fn test_stats_for_slug_passthrough() {
        let mut mock_repo = MockReportRepository::new();
        mock_repo
            .expect_stats_for_slug()
            .withf(|slug| slug == "a1b2c18")
            .times(1)
            .returning(|slug| Ok(Some(stats(slug, 4))));

        let service = ReportService::new(Arc::new(mock_repo), Arc::new(MemoryCache::new()));

        let result = service.stats_for_slug("a1b2c18").await.unwrap().unwrap();
        assert_eq!(result.visits, 4);
    }

    #[tokio::test]
    async fn test_stats_for_unknown_slug_is_none() {
        let mut mock_repo = MockReportRepository::new();
        mock_repo
            .expect_stats_for_slug()
            .times(1)
            .returning(|_| Ok(None));

        let service = ReportService::new(Arc::new(mock_repo), Arc::new(MemoryCache::new()));

        assert!(service.stats_for_slug("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_top_urls_populates_cache_on_miss() {
        let mut mock_repo = MockReportRepository::new();
        mock_repo
            .expect_top_urls()
            .times(1)
            .returning(|_| Ok(vec![stats("a1b2c18", 10), stats("a1b2c29", 5)]));

        let cache = Arc::new(MemoryCache::new());
        let service = ReportService::new(Arc::new(mock_repo), cache.clone());

        let result = service.top_urls(10).await.unwrap();
        assert_eq!(result.len(), 2);
        assert!(cache.get(TOP_URLS_CACHE_KEY).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_top_urls_serves_from_cache() {
        let mut mock_repo = MockReportRepository::new();
        // One store read, then the cached list answers the second call.
        mock_repo
            .expect_top_urls()
            .times(1)
            .returning(|_| Ok(vec![stats("a1b2c18", 10)]));

        let cache = Arc::new(MemoryCache::new());
        let service = ReportService::new(Arc::new(mock_repo), cache);

        let first = service.top_urls(10).await.unwrap();
        let second = service.top_urls(10).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_top_urls_ignores_undecodable_cache() {
        let mut mock_repo = MockReportRepository::new();
        mock_repo
            .expect_top_urls()
            .times(1)
            .returning(|_| Ok(vec![stats("a1b2c18", 1)]));

        let cache = Arc::new(MemoryCache::new());
        cache
            .set(TOP_URLS_CACHE_KEY, &serde_json::json!(42), None)
            .await
            .unwrap();

        let service = ReportService::new(Arc::new(mock_repo), cache);

        let result = service.top_urls(10).await.unwrap();
        assert_eq!(result.len(), 1);
    }
}
