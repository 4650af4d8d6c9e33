//! Handler for per-slug visit statistics.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::stats::UrlStatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns visit statistics for a specific slug.
///
/// # Endpoint
///
/// `GET /stats/{slug}`
///
/// # Errors
///
/// Returns 404 Not Found when the slug is unknown or has no visits.
pub async fn stats_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlStatsResponse>, AppError> {
    let stats = state
        .report_service
        .stats_for_slug(&slug)
        .await?
        .ok_or_else(|| {
            AppError::not_found("Slug not found or has no visits", json!({ "slug": slug }))
        })?;

    Ok(Json(stats.into()))
}
