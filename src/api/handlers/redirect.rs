//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its original URL and records the visit.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Request Flow
///
/// 1. Resolve the slug through the cache-aside path
/// 2. Record the visit and invalidate the top-N cache
/// 3. Return 307 Temporary Redirect
///
/// # Errors
///
/// Returns 404 Not Found when the slug does not exist.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let resolved = state
        .url_service
        .resolve_and_record(&slug)
        .await?
        .ok_or_else(|| AppError::not_found("Link not found", json!({ "slug": slug })))?;

    Ok(Redirect::temporary(&resolved.long_url))
}
