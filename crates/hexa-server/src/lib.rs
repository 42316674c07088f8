//! HTTP server for the Hexa resource service.
//!
//! Translates JSON requests into [`ResourceService`](hexa_core::ResourceService)
//! calls and maps results back to status codes. The server knows nothing
//! about hashing or storage beyond choosing which adapters to wire in.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | `POST` | `/resources` | 201 + resource JSON |
//! | `GET` | `/resources/{id...}` | 200 + resource JSON |
//! | `GET` | `/v1/health` | 200 |
//! | `GET` | `/v1/info` | 200 |

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ErrorBody, ServerError, ServerResult};
pub use handler::{CreateResourceRequest, HealthResponse, InfoResponse, ResourceResponse};
pub use router::build_router;
pub use server::HexaServer;
pub use state::AppState;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use hexa_core::ResourceManager;
    use hexa_crypto::{HasherKind, MockHasher};
    use hexa_store::{ResourceRepository, StoreError, StoreResult};
    use hexa_types::{Resource, ResourceId};
    use serde::de::DeserializeOwned;
    use tower::util::ServiceExt;

    struct BrokenRepository;

    #[async_trait]
    impl ResourceRepository for BrokenRepository {
        async fn save(&self, _resource: &Resource) -> StoreResult<()> {
            Err(StoreError::Backend("disk full".into()))
        }

        async fn get_by_id(&self, _id: &ResourceId) -> StoreResult<Option<Resource>> {
            Err(StoreError::Backend("connection reset".into()))
        }
    }

    fn app() -> Router {
        HexaServer::new(ServerConfig::default()).router()
    }

    fn broken_app() -> Router {
        let service = Arc::new(ResourceManager::new(
            Arc::new(MockHasher),
            Arc::new(BrokenRepository),
        ));
        build_router(AppState::new(service, HasherKind::Mock))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_owned())
            .unwrap_or_default();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, body.to_vec())
    }

    fn post(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/resources")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json<T: DeserializeOwned>(body: &[u8]) -> T {
        serde_json::from_slice(body).unwrap()
    }

    #[tokio::test]
    async fn create_then_get() {
        let app = app();

        let (status, content_type, body) = send(&app, post(r#"{"content":"hello"}"#)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(content_type, "application/json");
        let created: ResourceResponse = json(&body);
        assert_eq!(created.content, "hello");
        assert_eq!(created.id, "mock-hello");
        assert!(created.created_at.ends_with('Z'));

        let (status, _, body) = send(&app, get(&format!("/resources/{}", created.id))).await;
        assert_eq!(status, StatusCode::OK);
        let fetched: ResourceResponse = json(&body);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_empty_content_is_bad_request() {
        let app = app();
        let (status, content_type, body) = send(&app, post(r#"{"content":""}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(content_type, "application/json");
        let err: ErrorBody = json(&body);
        assert_eq!(err.error, "content cannot be empty");
    }

    #[tokio::test]
    async fn create_missing_content_is_bad_request() {
        let (status, _, _) = send(&app(), post("{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_malformed_json_is_bad_request() {
        let app = app();
        for body in ["{not json", "", "[1,2]", r#"{"content": 7}"#] {
            let (status, _, resp) = send(&app, post(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body:?}");
            let err: ErrorBody = json(&resp);
            assert_eq!(err.error, "invalid json");
        }
    }

    #[tokio::test]
    async fn create_without_content_type_is_accepted() {
        let request = Request::builder()
            .method("POST")
            .uri("/resources")
            .body(Body::from(r#"{"content":"plain"}"#))
            .unwrap();
        let (status, _, _) = send(&app(), request).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn get_unknown_is_not_found() {
        let (status, content_type, body) = send(&app(), get("/resources/does-not-exist")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type, "application/json");
        let err: ErrorBody = json(&body);
        assert_eq!(err.error, "not found");
    }

    #[tokio::test]
    async fn get_empty_id_is_not_found() {
        let (status, _, _) = send(&app(), get("/resources/")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn get_id_containing_slash() {
        let app = app();

        let (status, _, body) = send(&app, post(r#"{"content":"a/b"}"#)).await;
        assert_eq!(status, StatusCode::CREATED);
        let created: ResourceResponse = json(&body);
        assert_eq!(created.id, "mock-a/b");

        let (status, _, body) = send(&app, get("/resources/mock-a/b")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json::<ResourceResponse>(&body), created);

        let (status, _, _) = send(&app, get("/resources/mock-a/b/c")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn get_percent_encoded_id() {
        let app = app();

        let (status, _, body) = send(&app, post(r#"{"content":"hello world"}"#)).await;
        assert_eq!(status, StatusCode::CREATED);
        let created: ResourceResponse = json(&body);
        assert_eq!(created.id, "mock-hello world");

        let (status, _, body) = send(&app, get("/resources/mock-hello%20world")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json::<ResourceResponse>(&body).content, "hello world");
    }

    #[tokio::test]
    async fn storage_failure_is_internal_error_without_details() {
        let app = broken_app();

        let (status, _, body) = send(&app, post(r#"{"content":"hello"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let err: ErrorBody = json(&body);
        assert_eq!(err.error, "internal error");

        let (status, _, _) = send(&app, get("/resources/mock-hello")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn wrong_method_is_method_not_allowed() {
        let (status, content_type, _) = send(&app(), get("/resources")).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(content_type, "application/json");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let (status, _, _) = send(&app(), get("/nowhere")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn health_endpoint() {
        let (status, _, body) = send(&app(), get("/v1/health")).await;
        assert_eq!(status, StatusCode::OK);
        let health: HealthResponse = json(&body);
        assert_eq!(health.status, "ok");
    }

    #[tokio::test]
    async fn info_endpoint_reports_hasher() {
        let config = ServerConfig {
            hasher: HasherKind::Blake3,
            ..ServerConfig::default()
        };
        let app = HexaServer::new(config).router();
        let (status, _, body) = send(&app, get("/v1/info")).await;
        assert_eq!(status, StatusCode::OK);
        let info: InfoResponse = json(&body);
        assert_eq!(info.name, "hexa-server");
        assert_eq!(info.hasher, "blake3");
    }

    #[tokio::test]
    async fn concurrent_creates_are_all_retrievable() {
        let app = app();
        let handles: Vec<_> = (0..20)
            .map(|i| {
                let app = app.clone();
                tokio::spawn(async move {
                    let (status, _, body) =
                        send(&app, post(&format!(r#"{{"content":"item-{i}"}}"#))).await;
                    assert_eq!(status, StatusCode::CREATED);
                    json::<ResourceResponse>(&body)
                })
            })
            .collect();

        for h in handles {
            let created = h.await.unwrap();
            let (status, _, body) = send(&app, get(&format!("/resources/{}", created.id))).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(json::<ResourceResponse>(&body).content, created.content);
        }
    }
}
