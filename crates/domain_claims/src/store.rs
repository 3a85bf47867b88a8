//! Claim store
//!
//! Append-only ordered log of filed claims with write-through persistence.
//! There is no update or delete: corrections are filed as new claims.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use infra_persistence::{SnapshotError, SnapshotStore, CLAIMS_KEY};

use crate::claim::{Claim, ClaimSubmission};
use crate::error::ClaimError;

/// In-memory claim log with write-through persistence
pub struct ClaimStore {
    snapshots: Arc<dyn SnapshotStore>,
    claims: RwLock<Vec<Claim>>,
}

impl ClaimStore {
    /// Loads the persisted log once; an absent key means empty
    pub async fn load(snapshots: Arc<dyn SnapshotStore>) -> Result<Self, SnapshotError> {
        let claims: Vec<Claim> = match snapshots.load(CLAIMS_KEY).await? {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| SnapshotError::corrupt(CLAIMS_KEY, e.to_string()))?,
            None => Vec::new(),
        };

        Ok(Self {
            snapshots,
            claims: RwLock::new(claims),
        })
    }

    /// Validates and appends one claim
    ///
    /// Rejection leaves the log untouched. The referenced case name is not
    /// checked for existence: claims may outlive their case.
    pub async fn add_claim(&self, submission: ClaimSubmission) -> Result<Claim, ClaimError> {
        let claim = submission.validate()?;

        let json = {
            let mut claims = self.claims.write().await;
            claims.push(claim.clone());
            info!(claim = %claim.id, case = %claim.case_name, "claim filed");
            serde_json::to_string(&*claims)
        };

        self.write_through(json).await;
        Ok(claim)
    }

    /// Returns the last `n` claims, most recently filed first
    ///
    /// Ordering is by insertion, not by the claim's loss date.
    pub async fn recent(&self, n: usize) -> Vec<Claim> {
        let claims = self.claims.read().await;
        claims.iter().rev().take(n).cloned().collect()
    }

    /// Returns a snapshot of the whole log in insertion order
    pub async fn claims(&self) -> Vec<Claim> {
        self.claims.read().await.clone()
    }

    /// Number of filed claims
    pub async fn len(&self) -> usize {
        self.claims.read().await.len()
    }

    /// Returns true when no claims have been filed
    pub async fn is_empty(&self) -> bool {
        self.claims.read().await.is_empty()
    }

    /// Fire-and-forget write-through of the serialized log
    async fn write_through(&self, json: Result<String, serde_json::Error>) {
        let json = match json {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "claim snapshot serialization failed");
                return;
            }
        };
        if let Err(e) = self.snapshots.save(CLAIMS_KEY, &json).await {
            warn!(error = %e, "claim snapshot write failed");
        }
    }
}
