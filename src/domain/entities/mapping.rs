//! Mapping entity representing one short code to URL association.

use chrono::{DateTime, Utc};

/// The stored association of a short code with a target URL and expiry.
///
/// A mapping is immutable after creation: there is no rename, retarget, or
/// renewal operation. Expiry is a logical state derived from the clock at
/// read time, so an expired mapping stays stored (and queryable) until the
/// purge sweep removes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapping {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Mapping {
    /// Creates a new Mapping stamped with the current time.
    pub fn new(code: String, long_url: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            code,
            long_url,
            created_at: Utc::now(),
            expires_at,
        }
    }

    /// Returns true once the expiry deadline has been reached.
    ///
    /// The boundary is inclusive: a mapping whose `expires_at` equals the
    /// current instant is already expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
