//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The route layer hands over the path segment as the code; the handler
/// resolves it and issues a 307 Temporary Redirect to the stored URL, with
/// an `http://` prefix added when the stored value lacks a scheme.
///
/// # Errors
///
/// Returns 404 Not Found when the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.service.resolve(&code).await?;

    debug!(code = %code, target = %original_url, "redirecting");

    Ok(Redirect::temporary(&original_url))
}
