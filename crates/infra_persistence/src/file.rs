//! JSON-file snapshot adapter
//!
//! Stores each logical key as `<key>.json` inside a configured directory.
//! Saves go through a temporary file followed by a rename, so a crash
//! mid-write leaves the previous snapshot intact.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::error::SnapshotError;
use crate::store::SnapshotStore;

/// File-backed snapshot store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `dir`, creating the directory if missing
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, SnapshotError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| SnapshotError::io(dir.display().to_string(), e))?;
        Ok(Self { dir })
    }

    /// Returns the directory holding the snapshot files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn load(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SnapshotError::io(key, e)),
        }
    }

    async fn save(&self, key: &str, json: &str) -> Result<(), SnapshotError> {
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));

        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| SnapshotError::io(key, e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| SnapshotError::io(key, e))?;

        debug!(key, bytes = json.len(), "snapshot written");
        Ok(())
    }
}
