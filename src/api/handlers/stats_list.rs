//! Handler for the most-visited URL listing.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::stats::{TopUrlsParams, UrlStatsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Default number of entries when `limit` is omitted.
const DEFAULT_LIMIT: i64 = 10;

/// Upper bound on the requested list size.
const MAX_LIMIT: i64 = 100;

/// Returns the most-visited URLs ordered by visit count.
///
/// # Endpoint
///
/// `GET /stats?limit=N`
///
/// Served from the top-N cache when populated; any recorded visit since the
/// last read invalidates it.
pub async fn stats_list_handler(
    State(state): State<AppState>,
    Query(params): Query<TopUrlsParams>,
) -> Result<Json<Vec<UrlStatsResponse>>, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let stats = state.report_service.top_urls(limit).await?;

    Ok(Json(stats.into_iter().map(Into::into).collect()))
}
