//! Snapshot store port
//!
//! The stores own their collections in memory; durability is a write-through
//! of the whole serialized collection under a fixed logical key. Adapters
//! implement this trait for the actual medium (local JSON files in
//! production, a hash map in tests).

use async_trait::async_trait;

use crate::error::SnapshotError;

/// Logical key for the case collection snapshot
pub const CASES_KEY: &str = "cases";

/// Logical key for the claim collection snapshot
pub const CLAIMS_KEY: &str = "claims";

/// Durable key-value storage for serialized collections
///
/// Implementations must treat an absent key as an empty collection: `load`
/// returns `Ok(None)` rather than an error. `save` replaces the whole
/// document for the key. No schema versioning is provided.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Loads the JSON document stored under `key`, if any
    async fn load(&self, key: &str) -> Result<Option<String>, SnapshotError>;

    /// Replaces the JSON document stored under `key`
    async fn save(&self, key: &str, json: &str) -> Result<(), SnapshotError>;
}
