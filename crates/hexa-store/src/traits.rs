use async_trait::async_trait;
use hexa_types::{Resource, ResourceId};

use crate::error::StoreResult;

/// Keyed storage for resources.
///
/// All implementations must satisfy these invariants:
/// - `save` stores a copy; later changes to the caller's value are not seen.
/// - `get_by_id` returns a copy, never the stored instance.
/// - A save is visible to every `get_by_id` that starts after it returns.
/// - An unknown id yields `Ok(None)`.
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// Persist `resource` under its id, replacing any existing entry.
    async fn save(&self, resource: &Resource) -> StoreResult<()>;

    /// Load the resource stored under `id`.
    ///
    /// Returns `Ok(None)` if nothing is stored under that id.
    async fn get_by_id(&self, id: &ResourceId) -> StoreResult<Option<Resource>>;
}
