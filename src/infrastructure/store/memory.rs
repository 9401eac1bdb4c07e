//! In-memory mapping store.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Process-local mapping registry backed by a `HashMap` behind a
/// reader-writer lock.
///
/// Readers run concurrently; writers are exclusive with each other and with
/// readers. The lock is held only for the duration of a single map
/// operation and never across an await point, so a reader observes a
/// mapping either fully formed or not at all.
#[derive(Debug, Default)]
pub struct MemoryMappingStore {
    inner: RwLock<HashMap<String, Mapping>>,
}

impl MemoryMappingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MappingRepository for MemoryMappingStore {
    async fn insert(&self, mapping: Mapping) -> Result<(), AppError> {
        let mut map = self.inner.write().unwrap();

        // Existence check and insertion under one write-lock acquisition:
        // of two racing inserts for a code, exactly one can win.
        match map.entry(mapping.code.clone()) {
            Entry::Occupied(_) => Err(AppError::CodeTaken { code: mapping.code }),
            Entry::Vacant(slot) => {
                slot.insert(mapping);
                Ok(())
            }
        }
    }

    async fn get(&self, code: &str) -> Result<Option<Mapping>, AppError> {
        Ok(self.inner.read().unwrap().get(code).cloned())
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.inner.read().unwrap().contains_key(code))
    }

    async fn purge_expired(&self) -> Result<usize, AppError> {
        let mut map = self.inner.write().unwrap();
        let before = map.len();
        map.retain(|_, mapping| !mapping.is_expired());
        Ok(before - map.len())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.inner.read().unwrap().len())
    }
}
