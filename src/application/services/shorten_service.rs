//! Short link creation service.

use std::sync::Arc;

use chrono::{DateTime, Months, NaiveDateTime, Utc};

use crate::domain::entities::Mapping;
use crate::domain::policy::ContentPolicy;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::validate_target_url;

/// Accepted expiry input format (e.g. `2026-09-08T18:30`), interpreted as UTC.
const EXPIRY_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Collision retry cap for generated codes.
const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Service for creating short links.
///
/// Handles URL validation, the content policy check, expiry resolution, and
/// code resolution with bounded collision retry. Uniqueness is enforced
/// solely by the store's atomic insert; both the custom and the generated
/// path go through it, so racing requests on one code can never both win.
pub struct ShortenService<R: MappingRepository> {
    repository: Arc<R>,
    policy: Arc<dyn ContentPolicy>,
    code_length: usize,
}

impl<R: MappingRepository> ShortenService<R> {
    /// Creates a new shortening service.
    ///
    /// `code_length` is the length of generated codes; custom codes carry
    /// their own length rules.
    pub fn new(repository: Arc<R>, policy: Arc<dyn ContentPolicy>, code_length: usize) -> Self {
        Self {
            repository,
            policy,
            code_length,
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `long_url` - The original URL to shorten
    /// - `custom_code` - Optional custom short code; empty strings count as absent
    /// - `expiry` - Optional `YYYY-MM-DDTHH:MM` deadline; empty strings count
    ///   as absent, and absent defaults to one month from now
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] - empty or non-absolute http(s) URL
    /// - [`AppError::PolicyRejected`] - content policy flagged the URL or code
    /// - [`AppError::InvalidExpiry`] / [`AppError::ExpiryInPast`] - bad deadline
    /// - [`AppError::InvalidCode`] - custom code failed validation
    /// - [`AppError::CodeTaken`] - custom code already registered
    /// - [`AppError::GenerationExhausted`] - every generated candidate collided
    /// - [`AppError::Entropy`] - random source failure
    ///
    /// On any failure nothing is inserted.
    pub async fn shorten(
        &self,
        long_url: &str,
        custom_code: Option<String>,
        expiry: Option<String>,
    ) -> Result<Mapping, AppError> {
        let long_url = validate_target_url(long_url)?;

        // Form submissions send empty strings for untouched optional fields.
        let custom_code = custom_code.filter(|c| !c.trim().is_empty());
        let expiry = expiry.filter(|e| !e.trim().is_empty());

        if !self.policy.is_allowed(&long_url) {
            return Err(AppError::PolicyRejected { field: "url" });
        }
        if let Some(code) = custom_code.as_deref() {
            if !self.policy.is_allowed(code) {
                return Err(AppError::PolicyRejected {
                    field: "custom code",
                });
            }
        }

        let expires_at = resolve_expiry(expiry.as_deref())?;

        match custom_code {
            Some(custom) => {
                validate_custom_code(&custom)?;

                let mapping = Mapping::new(custom, long_url, expires_at);
                self.repository.insert(mapping.clone()).await?;
                Ok(mapping)
            }
            None => self.insert_generated(long_url, expires_at).await,
        }
    }

    /// Builds the fully-qualified short URL for a code.
    ///
    /// The base URL is injected by the caller (it comes from configuration,
    /// not from request inspection).
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }

    /// Generates candidate codes until one inserts cleanly.
    ///
    /// Collisions are rare at any realistic store size, but the insert can
    /// still lose the race; each loss burns one of
    /// [`MAX_GENERATION_ATTEMPTS`] attempts before the request fails with
    /// [`AppError::GenerationExhausted`].
    async fn insert_generated(
        &self,
        long_url: String,
        expires_at: DateTime<Utc>,
    ) -> Result<Mapping, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_code(self.code_length)?;
            let mapping = Mapping::new(code, long_url.clone(), expires_at);

            match self.repository.insert(mapping.clone()).await {
                Ok(()) => return Ok(mapping),
                Err(AppError::CodeTaken { .. }) => continue,
                Err(other) => return Err(other),
            }
        }

        Err(AppError::GenerationExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }
}

/// Resolves the expiry input to a concrete deadline.
///
/// Absent input defaults to one month from now. The deadline must be
/// strictly in the future.
fn resolve_expiry(input: Option<&str>) -> Result<DateTime<Utc>, AppError> {
    let expires_at = match input {
        None => Utc::now() + Months::new(1),
        Some(raw) => NaiveDateTime::parse_from_str(raw, EXPIRY_FORMAT)
            .map_err(|_| AppError::InvalidExpiry {
                input: raw.to_string(),
            })?
            .and_utc(),
    };

    if expires_at <= Utc::now() {
        return Err(AppError::ExpiryInPast);
    }

    Ok(expires_at)
}
