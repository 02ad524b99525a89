//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::memory::InMemoryMappingRepository;

/// Concrete link service used by the HTTP layer.
pub type AppLinkService = LinkService<InMemoryMappingRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
}

impl AppState {
    /// Creates state around an empty in-memory store.
    pub fn new(base_url: impl Into<String>) -> Self {
        let repository = Arc::new(InMemoryMappingRepository::new());
        Self {
            link_service: Arc::new(LinkService::new(repository, base_url)),
        }
    }
}
