//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// `url` is free-form text; it is stored exactly as submitted and only gets
/// a scheme prefix when the link is later resolved.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
}

/// Response for a created redirect.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// The generated 8-character short code.
    pub code: String,
    /// Full short URL (`BASE_URL` + code) for display.
    pub short_url: String,
}
