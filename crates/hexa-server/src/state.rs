use std::sync::Arc;

use hexa_core::ResourceService;
use hexa_crypto::HasherKind;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn ResourceService>,
    /// Reported by the info endpoint.
    pub hasher: HasherKind,
}

impl AppState {
    pub fn new(service: Arc<dyn ResourceService>, hasher: HasherKind) -> Self {
        Self { service, hasher }
    }
}
