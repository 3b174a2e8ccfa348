//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short redirect for a submitted URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "example.com/some/page" }
/// ```
///
/// # Response
///
/// ```json
/// { "code": "aB3kX9mQ", "short_url": "http://localhost:3000/aB3kX9mQ" }
/// ```
///
/// The submitted text is stored as-is; scheme normalization happens when the
/// link is resolved. Submitting the same URL twice yields two distinct codes.
///
/// # Errors
///
/// Returns 500 Internal Server Error when the record could not be stored or
/// when code generation kept colliding. A returned code is always backed by a
/// stored record.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let code = state.service.create(payload.url).await?;

    let short_url = format!("{}/{}", state.base_url.trim_end_matches('/'), code);

    Ok(Json(ShortenResponse {
        code,
        short_url,
    }))
}
