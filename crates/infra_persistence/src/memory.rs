//! In-memory snapshot adapter for testing
//!
//! Stores documents in a hash map and is useful for unit testing the stores
//! without touching the file system. Saves can be made to fail on demand to
//! exercise the fire-and-forget write-through path.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::SnapshotError;
use crate::store::SnapshotStore;

/// In-memory implementation of `SnapshotStore`
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<String, String>>,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a document for a key
    pub async fn with_document(self, key: &str, json: &str) -> Self {
        self.documents
            .write()
            .await
            .insert(key.to_string(), json.to_string());
        self
    }

    /// When set, every subsequent `save` fails with an I/O error
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::Relaxed);
    }

    /// Returns the current document for a key, for assertions
    pub async fn document(&self, key: &str) -> Option<String> {
        self.documents.read().await.get(key).cloned()
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        Ok(self.documents.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, json: &str) -> Result<(), SnapshotError> {
        if self.fail_saves.load(Ordering::Relaxed) {
            return Err(SnapshotError::io(
                key,
                std::io::Error::new(std::io::ErrorKind::Other, "save disabled by test"),
            ));
        }
        self.documents
            .write()
            .await
            .insert(key.to_string(), json.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_roundtrip() {
        let store = MemoryStore::new();
        store.save("cases", "[]").await.unwrap();
        assert_eq!(store.load("cases").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        assert!(store.load("claims").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failing_saves() {
        let store = MemoryStore::new();
        store.set_fail_saves(true);
        assert!(store.save("cases", "[]").await.is_err());

        store.set_fail_saves(false);
        assert!(store.save("cases", "[]").await.is_ok());
    }
}
