use std::sync::Mutex;

use async_trait::async_trait;

use super::base::AuthContextStore;
use crate::models::AuthContext;

/// An in-memory session slot. Nothing survives the process; useful for tests
/// and for embedders that manage persistence themselves.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<AuthContext>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthContextStore for MemoryStore {
    async fn store(&self, context: &AuthContext) -> Result<(), String> {
        let mut slot = self.slot.lock().expect("memory store mutex poisoned");
        *slot = Some(context.clone());
        Ok(())
    }

    async fn load(&self) -> Option<AuthContext> {
        self.slot
            .lock()
            .expect("memory store mutex poisoned")
            .clone()
    }

    async fn clear(&self) {
        let mut slot = self.slot.lock().expect("memory store mutex poisoned");
        *slot = None;
    }
}
