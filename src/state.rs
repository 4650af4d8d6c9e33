//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ReportService, UrlService};
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::{
    PgReportRepository, PgSequenceRepository, PgUrlRepository,
};

/// Handler-facing view of the wired services.
///
/// The cache client is injected here rather than accessed as a process-wide
/// singleton, so tests can substitute an in-memory implementation.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService<PgUrlRepository, PgSequenceRepository>>,
    pub report_service: Arc<ReportService<PgReportRepository>>,
    pub cache: Arc<dyn CacheService>,
    pub db: Arc<PgPool>,
    pub base_url: String,
}

impl AppState {
    /// Wires repositories and services over a connection pool and cache.
    pub fn new(db: Arc<PgPool>, cache: Arc<dyn CacheService>, base_url: String) -> Self {
        let url_repository = Arc::new(PgUrlRepository::new(db.clone()));
        let sequence_repository = Arc::new(PgSequenceRepository::new(db.clone()));
        let report_repository = Arc::new(PgReportRepository::new(db.clone()));

        Self {
            url_service: Arc::new(UrlService::new(
                url_repository,
                sequence_repository,
                cache.clone(),
            )),
            report_service: Arc::new(ReportService::new(report_repository, cache.clone())),
            cache,
            db,
            base_url,
        }
    }
}
