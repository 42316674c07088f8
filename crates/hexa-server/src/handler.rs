use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use hexa_types::Resource;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// JSON body accepted by `POST /resources`.
///
/// A missing `content` field is treated as empty content, which the service
/// then rejects.
#[derive(Debug, Deserialize)]
pub struct CreateResourceRequest {
    #[serde(default)]
    pub content: String,
}

/// JSON representation of a resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceResponse {
    pub id: String,
    pub content: String,
    pub created_at: String,
}

impl From<&Resource> for ResourceResponse {
    fn from(r: &Resource) -> Self {
        Self {
            id: r.id().to_string(),
            content: r.content().to_owned(),
            created_at: r.created_at_rfc3339(),
        }
    }
}

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Info response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub hasher: String,
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        name: "hexa-server".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        hasher: state.hasher.to_string(),
    })
}

/// `POST /resources`
pub async fn create_resource(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<ResourceResponse>), ApiError> {
    let body = body.map_err(|_| ApiError::BadRequest("invalid body".into()))?;
    let req: CreateResourceRequest = serde_json::from_slice(&body)
        .map_err(|_| ApiError::BadRequest("invalid json".into()))?;

    let resource = state.service.create(&req.content).await?;
    tracing::info!(id = %resource.id(), "resource created");
    Ok((StatusCode::CREATED, Json(ResourceResponse::from(&resource))))
}

/// `GET /resources/*id`
///
/// Everything after `/resources/` is the id, percent-decoded, slashes
/// included.
pub async fn get_resource(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<ResourceResponse>, ApiError> {
    let Ok(Path(id)) = id else {
        return Err(ApiError::NotFound);
    };
    let id = id.trim_start_matches('/');
    if id.is_empty() {
        return Err(ApiError::NotFound);
    }
    match state.service.get_by_id(id).await? {
        Some(resource) => Ok(Json(ResourceResponse::from(&resource))),
        None => Err(ApiError::NotFound),
    }
}

/// Fallback for paths that match no route.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
