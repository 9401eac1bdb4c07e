#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, Utc};
use shortly::application::services::{RedirectService, ShortenService};
use shortly::domain::entities::Mapping;
use shortly::domain::policy::ContentPolicy;
use shortly::domain::repositories::MappingRepository;
use shortly::infrastructure::policy::AllowAllPolicy;
use shortly::infrastructure::store::MemoryMappingStore;
use shortly::state::AppState;

pub const TEST_BASE_URL: &str = "https://sho.test";

pub fn create_test_state() -> AppState {
    create_test_state_with_policy(Arc::new(AllowAllPolicy::new()))
}

pub fn create_test_state_with_policy(policy: Arc<dyn ContentPolicy>) -> AppState {
    let store = Arc::new(MemoryMappingStore::new());

    AppState {
        shorten_service: Arc::new(ShortenService::new(store.clone(), policy, 6)),
        redirect_service: Arc::new(RedirectService::new(store.clone())),
        store,
        base_url: TEST_BASE_URL.to_string(),
    }
}

pub async fn create_test_mapping(state: &AppState, code: &str, url: &str) {
    state
        .store
        .insert(Mapping::new(
            code.to_string(),
            url.to_string(),
            Utc::now() + Duration::days(1),
        ))
        .await
        .unwrap();
}

pub async fn create_expired_mapping(state: &AppState, code: &str, url: &str) {
    state
        .store
        .insert(Mapping::new(
            code.to_string(),
            url.to_string(),
            Utc::now() - Duration::hours(1),
        ))
        .await
        .unwrap();
}
