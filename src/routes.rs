//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`      - Create (or reuse) a short link
//! - `GET  /stats`        - Most-visited URLs (top-N, cached)
//! - `GET  /stats/{slug}` - Per-slug visit statistics
//! - `GET  /health`       - Health check: DB and cache
//! - `GET  /{slug}`       - Short link redirect

use axum::{
    Router,
    routing::{get, post},
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{
    health_handler, redirect_handler, shorten_handler, stats_handler, stats_list_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats", get(stats_list_handler))
        .route("/stats/{slug}", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/{slug}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
