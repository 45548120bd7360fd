use async_trait::async_trait;

use super::base::AuthContextStore;
use crate::models::AuthContext;

/// A no-op store used when persistence is disabled: every load is "no
/// session", every write is rejected. The SDK stays usable, it just never
/// remembers a session across calls.
pub struct NoStore;

impl NoStore {
    pub fn new() -> Self {
        NoStore
    }
}

impl Default for NoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthContextStore for NoStore {
    async fn store(&self, _context: &AuthContext) -> Result<(), String> {
        Err("Auth context store is disabled".into())
    }

    async fn load(&self) -> Option<AuthContext> {
        None
    }

    async fn clear(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_no_store_rejects_writes() {
        let no_store = NoStore::new();
        let context = AuthContext::new("tok", Utc::now());
        assert!(no_store.store(&context).await.is_err());
    }

    #[tokio::test]
    async fn test_no_store_loads_nothing() {
        let no_store = NoStore::new();
        assert!(no_store.load().await.is_none());
        no_store.clear().await;
        assert!(no_store.load().await.is_none());
    }
}
