//! Short link resolution service.

use std::sync::Arc;

use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Service resolving short codes to target URLs.
///
/// Applies the expiry policy at lookup time: a mapping past its deadline
/// yields [`AppError::Expired`] (410 Gone) rather than
/// [`AppError::NotFound`] (404), and is never deleted here. Resolution has
/// no side effects, so correctness holds whether or not the purge sweep
/// ever runs.
pub struct RedirectService<R: MappingRepository> {
    repository: Arc<R>,
}

impl<R: MappingRepository> RedirectService<R> {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves a short code to its target URL.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] - the code was never issued (or was purged)
    /// - [`AppError::Expired`] - the mapping exists but its deadline passed
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let mapping = self
            .repository
            .get(code)
            .await?
            .ok_or_else(|| AppError::NotFound {
                code: code.to_string(),
            })?;

        if mapping.is_expired() {
            return Err(AppError::Expired {
                code: code.to_string(),
            });
        }

        Ok(mapping.long_url)
    }
}
