use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use hexa_crypto::ContentHasher;
use hexa_store::ResourceRepository;
use hexa_types::{Resource, ResourceId};

use crate::error::{ServiceError, ServiceResult};
use crate::traits::ResourceService;

/// Default [`ResourceService`] implementation.
///
/// Holds its capabilities behind `Arc<dyn _>` so the same hasher and
/// repository can be shared with other components, and so adapters can be
/// swapped without touching this code.
#[derive(Clone)]
pub struct ResourceManager {
    hasher: Arc<dyn ContentHasher>,
    repo: Arc<dyn ResourceRepository>,
}

impl ResourceManager {
    pub fn new(hasher: Arc<dyn ContentHasher>, repo: Arc<dyn ResourceRepository>) -> Self {
        Self { hasher, repo }
    }
}

#[async_trait]
impl ResourceService for ResourceManager {
    async fn create(&self, content: &str) -> ServiceResult<Resource> {
        if content.is_empty() {
            return Err(ServiceError::validation("content cannot be empty"));
        }
        let id = self.hasher.hash(content).map_err(ServiceError::Hash)?;
        let resource = Resource::new(id, content, Utc::now());
        self.repo
            .save(&resource)
            .await
            .map_err(|e| ServiceError::storage("save resource", e))?;
        tracing::debug!(id = %resource.id(), "created resource");
        Ok(resource)
    }

    async fn get_by_id(&self, id: &str) -> ServiceResult<Option<Resource>> {
        let found = self
            .repo
            .get_by_id(&ResourceId::from(id))
            .await
            .map_err(|e| ServiceError::storage("get resource", e))?;
        tracing::debug!(id, found = found.is_some(), "looked up resource");
        Ok(found)
    }
}

impl std::fmt::Debug for ResourceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceManager").finish_non_exhaustive()
    }
}
