use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::{file_store::FileStore, memory_store::MemoryStore, no_store::NoStore};
use crate::config::{StoreBackend, StoreConfig};
use crate::models::AuthContext;

/// The AuthContextStore trait abstracts the single persisted session slot
/// (store, load, clear).
///
/// Failure policy: `load` absorbs every read or parse failure into `None` —
/// a corrupt slot is indistinguishable from an empty one. `clear` is
/// idempotent and infallible; clearing an empty slot is a no-op. Only
/// `store` reports its outcome, since a failed write leaves no session
/// behind for a later `load`.
#[async_trait]
pub trait AuthContextStore: Send + Sync {
    async fn store(&self, context: &AuthContext) -> Result<(), String>;
    async fn load(&self) -> Option<AuthContext>;
    async fn clear(&self);
}

/// Creates a concrete store implementation based on the StoreConfig.
/// If `store.enabled = false`, returns NoStore. Otherwise, picks the specified backend.
pub fn create_store(config: &StoreConfig) -> Arc<dyn AuthContextStore> {
    if !config.enabled {
        info!("Auth context store is disabled. Using NoStore.");
        return Arc::new(NoStore::new());
    }

    match &config.backend {
        Some(StoreBackend::File(file_config)) => Arc::new(FileStore::new(file_config)),
        Some(StoreBackend::Memory) => Arc::new(MemoryStore::new()),
        None => {
            info!("Store is enabled but no backend is configured. Using NoStore.");
            Arc::new(NoStore::new())
        }
    }
}
