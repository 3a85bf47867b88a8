//! Case store
//!
//! Owns the ordered case collection and the current selection. All
//! mutations go through this store; the coordinator and the aggregator only
//! call its methods or read its snapshots. Every committed mutation writes
//! the whole collection through the snapshot port; a failed write is logged
//! and never rolls back in-memory state.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use core_kernel::{CaseId, FieldPolygon, RiskResult};
use infra_persistence::{SnapshotError, SnapshotStore, CASES_KEY};

use crate::case::Case;
use crate::error::CaseError;

#[derive(Debug, Default)]
struct Inner {
    cases: Vec<Case>,
    /// Selection is id-based; positions are recomputed per read so deletes
    /// elsewhere in the collection can never shift it.
    selected: Option<CaseId>,
}

/// In-memory case collection with write-through persistence
pub struct CaseStore {
    snapshots: Arc<dyn SnapshotStore>,
    inner: RwLock<Inner>,
}

impl CaseStore {
    /// Loads the persisted collection once; an absent key means empty
    pub async fn load(snapshots: Arc<dyn SnapshotStore>) -> Result<Self, SnapshotError> {
        let cases: Vec<Case> = match snapshots.load(CASES_KEY).await? {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| SnapshotError::corrupt(CASES_KEY, e.to_string()))?,
            None => Vec::new(),
        };

        Ok(Self {
            snapshots,
            inner: RwLock::new(Inner {
                cases,
                selected: None,
            }),
        })
    }

    /// Creates a case with the given name and selects it
    ///
    /// The name is trimmed before validation. Uniqueness is enforced
    /// case-insensitively, so "Field A" and "field a" collide.
    pub async fn create_case(&self, name: &str) -> Result<CaseId, CaseError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CaseError::EmptyName);
        }

        let (id, json) = {
            let mut inner = self.inner.write().await;
            if inner
                .cases
                .iter()
                .any(|c| c.name.eq_ignore_ascii_case(name))
            {
                return Err(CaseError::DuplicateName(name.to_string()));
            }

            let case = Case::new(name);
            let id = case.id;
            inner.cases.push(case);
            inner.selected = Some(id);
            info!(case = %id, name, "case created");
            (id, serde_json::to_string(&inner.cases))
        };

        self.write_through(json).await;
        Ok(id)
    }

    /// Sets the current selection; `None` switches to the portfolio view
    pub async fn select_case(&self, id: Option<CaseId>) -> Result<(), CaseError> {
        let mut inner = self.inner.write().await;
        if let Some(id) = id {
            if !inner.cases.iter().any(|c| c.id == id) {
                return Err(CaseError::NotFound(id));
            }
        }
        inner.selected = id;
        Ok(())
    }

    /// Removes a case; claims referencing it by name are left untouched
    pub async fn delete_case(&self, id: CaseId) -> Result<(), CaseError> {
        let json = {
            let mut inner = self.inner.write().await;
            let position = inner
                .cases
                .iter()
                .position(|c| c.id == id)
                .ok_or(CaseError::NotFound(id))?;

            inner.cases.remove(position);
            if inner.selected == Some(id) {
                inner.selected = None;
            }
            info!(case = %id, "case deleted");
            serde_json::to_string(&inner.cases)
        };

        self.write_through(json).await;
        Ok(())
    }

    /// Overwrites a case's polygon and risk result together
    ///
    /// Idempotent, and a silent no-op (returning `false`) when the case was
    /// deleted while the assessment was in flight.
    pub async fn apply_risk_result(
        &self,
        id: CaseId,
        polygon: FieldPolygon,
        result: RiskResult,
    ) -> bool {
        let json = {
            let mut inner = self.inner.write().await;
            let Some(case) = inner.cases.iter_mut().find(|c| c.id == id) else {
                warn!(case = %id, "discarding risk result for deleted case");
                return false;
            };

            case.polygon = Some(polygon);
            case.risk_result = Some(result);
            info!(case = %id, "risk result applied");
            serde_json::to_string(&inner.cases)
        };

        self.write_through(json).await;
        true
    }

    /// Returns a snapshot of the collection in insertion order
    pub async fn cases(&self) -> Vec<Case> {
        self.inner.read().await.cases.clone()
    }

    /// Returns the selected case id, if any
    pub async fn selected(&self) -> Option<CaseId> {
        self.inner.read().await.selected
    }

    /// Returns a copy of one case
    pub async fn get(&self, id: CaseId) -> Option<Case> {
        self.inner.read().await.cases.iter().find(|c| c.id == id).cloned()
    }

    /// Returns a copy of the selected case, if any
    pub async fn selected_case(&self) -> Option<Case> {
        let inner = self.inner.read().await;
        let id = inner.selected?;
        inner.cases.iter().find(|c| c.id == id).cloned()
    }

    /// Display-only position of the selection in the collection
    pub async fn selected_position(&self) -> Option<usize> {
        let inner = self.inner.read().await;
        let id = inner.selected?;
        inner.cases.iter().position(|c| c.id == id)
    }

    /// Number of cases in the collection
    pub async fn len(&self) -> usize {
        self.inner.read().await.cases.len()
    }

    /// Returns true when no cases exist
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.cases.is_empty()
    }

    /// Fire-and-forget write-through of the serialized collection
    async fn write_through(&self, json: Result<String, serde_json::Error>) {
        let json = match json {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "case snapshot serialization failed");
                return;
            }
        };
        if let Err(e) = self.snapshots.save(CASES_KEY, &json).await {
            warn!(error = %e, "case snapshot write failed");
        }
    }
}
