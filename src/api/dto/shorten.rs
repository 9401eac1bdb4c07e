//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom code validation.
///
/// Matches the URL-safe alphabet generated codes are drawn from; an empty
/// string is accepted here and treated as "no custom code" downstream.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").unwrap());

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be an absolute HTTP/HTTPS URL).
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,

    /// Optional custom short code (validated for charset).
    #[validate(regex(
        path = "*CUSTOM_CODE_REGEX",
        message = "Custom code may only contain letters, digits, hyphens, and underscores"
    ))]
    pub custom_code: Option<String>,

    /// Optional expiry in `YYYY-MM-DDTHH:MM` (UTC). Defaults to one month
    /// from now. After this time, the link returns 410 Gone.
    pub expires_at: Option<String>,
}

/// Response for a successfully created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub expires_at: DateTime<Utc>,
}
