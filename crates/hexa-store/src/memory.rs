use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use hexa_types::{Resource, ResourceId};

use crate::error::{StoreError, StoreResult};
use crate::traits::ResourceRepository;

/// In-memory, HashMap-based resource repository.
///
/// Intended for tests and demos. All resources are held behind one `RwLock`:
/// reads run concurrently with each other, writes are exclusive. Nothing
/// survives a restart.
pub struct InMemoryResourceRepository {
    resources: RwLock<HashMap<ResourceId, Resource>>,
}

impl InMemoryResourceRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            resources: RwLock::new(HashMap::new()),
        }
    }

    fn read_map(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<ResourceId, Resource>>> {
        self.resources.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write_map(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<ResourceId, Resource>>> {
        self.resources.write().map_err(|_| StoreError::LockPoisoned)
    }

    /// Number of resources currently stored.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read_map()?.len())
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read_map()?.is_empty())
    }

    /// Remove every stored resource.
    pub fn clear(&self) -> StoreResult<()> {
        self.write_map()?.clear();
        Ok(())
    }

    /// Return a sorted list of all stored ids.
    pub fn all_ids(&self) -> StoreResult<Vec<ResourceId>> {
        let map = self.read_map()?;
        let mut ids: Vec<ResourceId> = map.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

impl Default for InMemoryResourceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceRepository for InMemoryResourceRepository {
    async fn save(&self, resource: &Resource) -> StoreResult<()> {
        let mut map = self.write_map()?;
        if map.insert(resource.id().clone(), resource.clone()).is_some() {
            tracing::debug!(id = %resource.id(), "overwrote existing resource");
        }
        Ok(())
    }

    async fn get_by_id(&self, id: &ResourceId) -> StoreResult<Option<Resource>> {
        let map = self.read_map()?;
        Ok(map.get(id).cloned())
    }
}

impl std::fmt::Debug for InMemoryResourceRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("InMemoryResourceRepository");
        match self.resources.read() {
            Ok(map) => s.field("resource_count", &map.len()),
            Err(_) => s.field("resource_count", &"<poisoned>"),
        };
        s.finish()
    }
}
