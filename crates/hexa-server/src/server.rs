use std::future::Future;
use std::sync::Arc;

use hexa_core::{ResourceManager, ResourceService};
use hexa_store::InMemoryResourceRepository;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Hexa resource server.
///
/// Owns the wiring between the configured adapters, the resource service and
/// the HTTP router.
pub struct HexaServer {
    config: ServerConfig,
    state: AppState,
}

impl HexaServer {
    /// Wire the adapters named by `config` into a new server.
    ///
    /// Storage is always the in-memory repository.
    pub fn new(config: ServerConfig) -> Self {
        let hasher = config.hasher.build();
        let repo = Arc::new(InMemoryResourceRepository::new());
        let service = Arc::new(ResourceManager::new(hasher, repo));
        Self::with_service(config, service)
    }

    /// Serve an already-built service.
    pub fn with_service(config: ServerConfig, service: Arc<dyn ResourceService>) -> Self {
        let state = AppState::new(service, config.hasher);
        Self { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests until the process is stopped.
    pub async fn serve(self) -> ServerResult<()> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Start serving requests; stop gracefully once `signal` completes.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        self.serve_on(listener, signal).await
    }

    /// Serve on an already-bound listener.
    pub async fn serve_on<F>(self, listener: TcpListener, signal: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        let addr = listener.local_addr()?;
        tracing::info!(hasher = %self.config.hasher, "hexa server listening on {addr}");
        axum::serve(listener, app)
            .with_graceful_shutdown(signal)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
