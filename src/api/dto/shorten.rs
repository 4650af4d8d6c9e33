//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single long URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub long_url: String,
}

/// The created (or reused) short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub slug: String,
    pub short_url: String,
}
