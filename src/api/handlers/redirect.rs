//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
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
/// # Errors
///
/// Returns 404 Not Found if the code was never issued (or has been purged),
/// and 410 Gone if the mapping exists but its expiry has passed. The two
/// are deliberately distinct responses.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let target = state.redirect_service.resolve(&code).await?;

    debug!(%code, %target, "redirecting");

    Ok(Redirect::temporary(&target))
}
