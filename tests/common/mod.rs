#![allow(dead_code)]

use std::sync::Arc;

use shortly::service::RedirectService;
use shortly::state::AppState;
use shortly::store::{InMemoryRedirectStore, NewRedirect, RedirectStore};
use shortly::utils::code_generator::CodeGenerator;

pub const BASE_URL: &str = "http://s.test.com";

/// Builds an app state backed by an in-memory store and a fixed-seed code
/// generator. The store handle is returned for direct seeding/inspection.
pub fn create_test_state() -> (AppState, Arc<InMemoryRedirectStore>) {
    create_test_state_with_seed(42)
}

pub fn create_test_state_with_seed(seed: u64) -> (AppState, Arc<InMemoryRedirectStore>) {
    let store = Arc::new(InMemoryRedirectStore::new());
    let codegen = Arc::new(CodeGenerator::from_seed(seed));
    let service = Arc::new(RedirectService::new(store.clone(), codegen));

    (AppState::new(service, BASE_URL.to_string()), store)
}

pub async fn seed_redirect(store: &InMemoryRedirectStore, code: &str, url: &str) {
    store
        .insert(NewRedirect {
            original_url: url.to_string(),
            short_code: code.to_string(),
        })
        .await
        .unwrap();
}
