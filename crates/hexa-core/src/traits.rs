use async_trait::async_trait;
use hexa_types::Resource;

use crate::error::ServiceResult;

/// Operations the core exposes to driving adapters.
///
/// Each call is a single pass with no intermediate state visible to callers.
/// Returned resources are independent copies.
#[async_trait]
pub trait ResourceService: Send + Sync {
    /// Validate `content`, derive its id, persist and return the new resource.
    ///
    /// Empty content fails with [`ServiceError::Validation`](crate::ServiceError::Validation)
    /// before any hashing or storage happens.
    async fn create(&self, content: &str) -> ServiceResult<Resource>;

    /// Look up a resource. Returns `Ok(None)` when no such resource exists.
    async fn get_by_id(&self, id: &str) -> ServiceResult<Option<Resource>>;
}
