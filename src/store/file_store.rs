use std::path::{Path, PathBuf};

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::base::AuthContextStore;
use crate::models::AuthContext;

/// Configuration for the file-backed store.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct FileStoreConfig {
    /// Path of the JSON file holding the session slot.
    pub path: PathBuf,
}

/// The durable session slot: one JSON file at a fixed path. Last writer
/// wins; no locking (single writer per process by assumption).
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(config: &FileStoreConfig) -> Self {
        FileStore {
            path: config.path.clone(),
        }
    }

    pub fn at(path: impl AsRef<Path>) -> Self {
        FileStore {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl AuthContextStore for FileStore {
    async fn store(&self, context: &AuthContext) -> Result<(), String> {
        let payload = serde_json::to_string(context)
            .map_err(|e| format!("Error serializing auth context: {}", e))?;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| format!("Error creating store directory: {}", e))?;
        }
        tokio::fs::write(&self.path, payload)
            .await
            .map_err(|e| format!("Error writing auth context: {}", e))
    }

    async fn load(&self) -> Option<AuthContext> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) => {
                debug!("No auth context at {}: {}", self.path.display(), e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(context) => Some(context),
            Err(e) => {
                // A corrupt slot degrades to "no session"; the entry is left
                // in place for inspection and will be overwritten by the next
                // store().
                warn!(
                    "Malformed auth context at {}, treating as absent: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    async fn clear(&self) {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => debug!("Cleared auth context at {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                "Failed to clear auth context at {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}
