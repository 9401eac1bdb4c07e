use std::sync::Arc;

use crate::application::services::{RedirectService, ShortenService};
use crate::infrastructure::store::MemoryMappingStore;

/// Shared application state injected into all handlers.
///
/// The store appears twice: behind the services for the write/read paths,
/// and directly for the health endpoint's mapping count.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<MemoryMappingStore>>,
    pub redirect_service: Arc<RedirectService<MemoryMappingStore>>,
    pub store: Arc<MemoryMappingStore>,
    pub base_url: String,
}
