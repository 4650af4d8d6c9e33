//! Application error taxonomy and HTTP response mapping.
//!
//! Absence of a slug or long URL is never modelled as an error: repositories
//! and services return `Option` and the API layer maps `None` to 404.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Top-level error type for all fallible operations.
#[derive(Debug)]
pub enum AppError {
    /// Bad input, e.g. an out-of-range integer handed to the encoder.
    Validation { message: String, details: Value },
    /// Lookup target does not exist where existence was required.
    NotFound { message: String, details: Value },
    /// Unique constraint violation (duplicate slug or long URL).
    Conflict { message: String, details: Value },
    /// Persistence failure: connection, constraint, lock timeout.
    Store { message: String, details: Value },
    /// Store failure during create-or-get; partial writes rolled back.
    Creation { message: String, details: Value },
    /// Cache store unreachable or payload (de)serialization failure.
    Cache { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn store(message: impl Into<String>, details: Value) -> Self {
        Self::Store {
            message: message.into(),
            details,
        }
    }
    pub fn creation(message: impl Into<String>, details: Value) -> Self {
        Self::Creation {
            message: message.into(),
            details,
        }
    }
    pub fn cache(message: impl Into<String>, details: Value) -> Self {
        Self::Cache {
            message: message.into(),
            details,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Validation { message, .. } => write!(f, "validation error: {}", message),
            Self::NotFound { message, .. } => write!(f, "not found: {}", message),
            Self::Conflict { message, .. } => write!(f, "conflict: {}", message),
            Self::Store { message, .. } => write!(f, "store error: {}", message),
            Self::Creation { message, .. } => write!(f, "creation error: {}", message),
            Self::Cache { message, .. } => write!(f, "cache error: {}", message),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message, details)
            }
            AppError::Store { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                message,
                details,
            ),
            AppError::Creation { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "creation_error",
                message,
                details,
            ),
            AppError::Cache { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "cache_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Maps a sqlx error to an [`AppError`], tagged with the failing operation
/// (e.g. "fetch slug", "create url", "create visit", "fetch sequence").
///
/// Unique constraint violations become [`AppError::Conflict`] so callers can
/// apply insert-on-conflict recovery; everything else is a generic store error.
pub fn map_sqlx_error(operation: &str, e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "operation": operation, "constraint": db.constraint() }),
            );
        }
    }

    tracing::error!("Database error during {}: {}", operation, e);
    AppError::store("Database error", json!({ "operation": operation }))
}
