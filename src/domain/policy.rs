//! Content policy seam applied to user-supplied text.
//!
//! The policy decides whether a target URL or custom code is acceptable.
//! It is injected into [`crate::application::services::ShortenService`] so
//! the word list or the whole algorithm can be swapped without touching the
//! shortening logic.

/// Predicate over user-supplied text.
///
/// # Implementations
///
/// - [`crate::infrastructure::policy::DenyListPolicy`] - substring deny list
/// - [`crate::infrastructure::policy::AllowAllPolicy`] - no-op for disabled policy
#[cfg_attr(test, mockall::automock)]
pub trait ContentPolicy: Send + Sync {
    /// Returns `true` when the text is acceptable.
    fn is_allowed(&self, text: &str) -> bool;
}
