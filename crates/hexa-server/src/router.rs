use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Endpoint paths served by the router.
pub mod endpoints {
    pub const HEALTH: &str = "/v1/health";
    pub const INFO: &str = "/v1/info";
    pub const RESOURCES: &str = "/resources";
    /// Catch-all so ids containing `/` stay addressable.
    pub const RESOURCE: &str = "/resources/*id";
}

/// Build the axum router with all Hexa endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::HEALTH,
            get(handler::health_handler).fallback(handler::method_not_allowed),
        )
        .route(
            endpoints::INFO,
            get(handler::info_handler).fallback(handler::method_not_allowed),
        )
        .route(
            endpoints::RESOURCES,
            post(handler::create_resource).fallback(handler::method_not_allowed),
        )
        .route(
            endpoints::RESOURCE,
            get(handler::get_resource).fallback(handler::method_not_allowed),
        )
        .fallback(handler::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
