//! Handler for the shorten endpoint.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL, or returns the existing one.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid URL, 500 for store failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::bad_request("Invalid request", json!({ "errors": e.to_string() })))?;

    let record = state.url_service.create_or_get(&payload.long_url).await?;

    let short_url = format!("{}/{}", state.base_url.trim_end_matches('/'), record.slug);

    Ok(Json(ShortenResponse {
        slug: record.slug,
        short_url,
    }))
}
