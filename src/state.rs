//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::service::RedirectService;

/// State shared across all request handlers.
///
/// Built once at startup; cloning is cheap (Arc + String).
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RedirectService>,
    /// Public prefix used to render short URLs.
    pub base_url: String,
}

impl AppState {
    pub fn new(service: Arc<RedirectService>, base_url: String) -> Self {
        Self { service, base_url }
    }
}
