//! No-op content policy for disabled filtering.

use crate::domain::policy::ContentPolicy;
use tracing::debug;

/// A policy that accepts everything.
///
/// Used when no deny list is configured, and in tests where the policy is
/// not under scrutiny.
pub struct AllowAllPolicy;

impl AllowAllPolicy {
    pub fn new() -> Self {
        debug!("Using AllowAllPolicy (content policy disabled)");
        Self
    }
}

impl Default for AllowAllPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentPolicy for AllowAllPolicy {
    fn is_allowed(&self, _text: &str) -> bool {
        true
    }
}
