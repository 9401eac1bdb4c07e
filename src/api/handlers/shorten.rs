//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "custom_code": "promo",            // optional
///   "expires_at": "2026-12-31T18:00"   // optional, UTC
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "promo",
///   "short_url": "https://sho.example/promo",
///   "expires_at": "2026-12-31T18:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 for invalid URL, code, or expiry inputs, 409 when the custom
/// code is already taken, and 500 when code generation fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let mapping = state
        .shorten_service
        .shorten(&payload.url, payload.custom_code, payload.expires_at)
        .await?;

    let short_url = state
        .shorten_service
        .short_url(&state.base_url, &mapping.code);

    tracing::debug!(code = %mapping.code, "short link created");

    Ok(Json(ShortenResponse {
        code: mapping.code,
        short_url,
        expires_at: mapping.expires_at,
    }))
}
