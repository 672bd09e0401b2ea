use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub mod entity;

mod error;
pub use error::{StoreError, StoreResult};

mod repo;
pub use repo::{CrudRepository, ResourceType, ResourceTyped};

mod seed;

mod store;
pub use store::{Store, Table};

/// Shared handle to the store. Every repository call takes the lock exactly once,
/// so a find-or-create never interleaves with another mutation.
#[derive(Debug, Clone)]
pub struct ModelManager {
    store: Arc<RwLock<Store>>,
}

impl ModelManager {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().await
    }
}
