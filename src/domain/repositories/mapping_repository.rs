//! Repository trait for short link mappings.

use crate::domain::entities::Mapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the mapping registry.
///
/// The store exclusively owns the mapping collection; every other component
/// goes through this trait. Implementations must serialize mutation and
/// allow concurrent reads, and a successful [`MappingRepository::insert`]
/// must be visible to every lookup that starts after it returns.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::MemoryMappingStore`] - in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Registers a new mapping.
    ///
    /// The existence check and the insertion happen as one atomic step:
    /// when two callers race on the same code, exactly one wins and the
    /// other observes [`AppError::CodeTaken`]. An existing mapping is never
    /// overwritten.
    async fn insert(&self, mapping: Mapping) -> Result<(), AppError>;

    /// Looks up a mapping by its short code.
    ///
    /// Expired mappings are still returned; expiry is the caller's policy
    /// decision, not the store's.
    async fn get(&self, code: &str) -> Result<Option<Mapping>, AppError>;

    /// Returns true iff a mapping with that code is currently registered,
    /// regardless of expiry.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Deletes every mapping whose expiry has passed and returns how many
    /// were removed. Only the background sweep calls this; redirect
    /// correctness never depends on it.
    async fn purge_expired(&self) -> Result<usize, AppError>;

    /// Number of mappings currently registered, expired entries included.
    async fn count(&self) -> Result<usize, AppError>;
}
