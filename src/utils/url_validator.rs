//! Target URL validation.
//!
//! The service stores the URL exactly as submitted (after trimming); parsing
//! is only used to establish that the input is a well-formed absolute URL.

use crate::error::AppError;
use url::Url;

/// Validates that the input is a well-formed absolute http(s) URL and
/// returns the trimmed form to store.
///
/// # Rules
///
/// - Non-empty after trimming
/// - Parses as an absolute URL
/// - Scheme is `http` or `https` (rejects `javascript:`, `data:`, `file:`, ...)
/// - Host is present
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] with the failing rule as the reason.
pub fn validate_target_url(input: &str) -> Result<String, AppError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(AppError::InvalidUrl {
            reason: "URL must not be empty".to_string(),
        });
    }

    let url = Url::parse(trimmed).map_err(|e| AppError::InvalidUrl {
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::InvalidUrl {
                reason: format!("unsupported scheme {:?}", other),
            });
        }
    }

    if url.host_str().is_none() {
        return Err(AppError::InvalidUrl {
            reason: "URL must include a host".to_string(),
        });
    }

    Ok(trimmed.to_string())
}
