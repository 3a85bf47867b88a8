//! Workbench facade
//!
//! The contract the UI layer calls into: case and claim commands, the two
//! risk-sync triggers (polygon drawn, coverage changed), and the read
//! surface (cases, claims, pending/error state, portfolio aggregates).
//! Everything behind this facade follows the single-writer discipline: the
//! stores own their collections, the coordinator owns sync state, and the
//! aggregator only reads.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{CaseId, FieldPolygon};
use domain_case::{Case, CaseStore};
use domain_claims::{Claim, ClaimStore, ClaimSubmission};
use domain_portfolio::PortfolioView;
use infra_persistence::{JsonFileStore, SnapshotStore};
use risk_client::{HttpRiskAssessor, RiskAssessor};

use crate::config::WorkbenchConfig;
use crate::coordinator::RiskSyncCoordinator;
use crate::error::WorkbenchError;

/// Session default for the coverage multiplier
pub const DEFAULT_COVERAGE: f64 = 1.0;

/// The underwriting workbench core
pub struct Workbench {
    cases: Arc<CaseStore>,
    claims: Arc<ClaimStore>,
    coordinator: RiskSyncCoordinator,
    /// Session coverage multiplier; applied to every assessment request
    coverage: RwLock<f64>,
}

impl Workbench {
    /// Opens a workbench over the given persistence and assessor adapters
    ///
    /// Both collections are loaded once here; afterwards every mutation
    /// writes through.
    pub async fn open(
        snapshots: Arc<dyn SnapshotStore>,
        assessor: Arc<dyn RiskAssessor>,
    ) -> Result<Self, WorkbenchError> {
        let cases = Arc::new(CaseStore::load(snapshots.clone()).await?);
        let claims = Arc::new(ClaimStore::load(snapshots).await?);
        let coordinator = RiskSyncCoordinator::new(cases.clone(), assessor);

        Ok(Self {
            cases,
            claims,
            coordinator,
            coverage: RwLock::new(DEFAULT_COVERAGE),
        })
    }

    /// Opens a workbench with production adapters built from configuration
    pub async fn open_with_config(config: &WorkbenchConfig) -> Result<Self, WorkbenchError> {
        let snapshots = Arc::new(JsonFileStore::open(config.data_dir.clone()).await?);
        let assessor = Arc::new(HttpRiskAssessor::new(config.risk_service())?);
        Self::open(snapshots, assessor).await
    }

    // ========================================================================
    // Case commands
    // ========================================================================

    /// Creates and selects a new case
    pub async fn new_case(&self, name: &str) -> Result<CaseId, WorkbenchError> {
        Ok(self.cases.create_case(name).await?)
    }

    /// Deletes a case and drops its sync state
    ///
    /// An assessment still in flight for it is discarded on arrival.
    pub async fn delete_case(&self, id: CaseId) -> Result<(), WorkbenchError> {
        self.cases.delete_case(id).await?;
        self.coordinator.forget(id).await;
        Ok(())
    }

    /// Changes the selection; `None` shows the portfolio view
    pub async fn select_case(&self, id: Option<CaseId>) -> Result<(), WorkbenchError> {
        Ok(self.cases.select_case(id).await?)
    }

    // ========================================================================
    // Claim commands
    // ========================================================================

    /// Validates and files a claim
    pub async fn new_claim(&self, submission: ClaimSubmission) -> Result<Claim, WorkbenchError> {
        Ok(self.claims.add_claim(submission).await?)
    }

    // ========================================================================
    // Risk-sync triggers
    // ========================================================================

    /// Handles a polygon draw/edit on the map
    ///
    /// `Some(geojson)` triggers an assessment of the drawn feature for the
    /// selected case under the session coverage; the case's stored polygon
    /// changes only when that assessment succeeds. `None` (the draw tool
    /// was cleared) is a no-op. The returned future resolves once
    /// reconciliation has finished.
    pub async fn polygon_drawn(
        &self,
        geojson: Option<serde_json::Value>,
    ) -> Result<(), WorkbenchError> {
        let Some(geojson) = geojson else {
            debug!("polygon cleared; nothing to assess");
            return Ok(());
        };

        let polygon =
            FieldPolygon::new(geojson).map_err(|e| WorkbenchError::InvalidPolygon(e.to_string()))?;
        let case = self
            .cases
            .selected()
            .await
            .ok_or(WorkbenchError::NoCaseSelected)?;
        let coverage = *self.coverage.read().await;

        self.coordinator
            .request_assessment(case, polygon, coverage)
            .await;
        Ok(())
    }

    /// Handles a coverage-slider change
    ///
    /// Updates the session multiplier and, when the selected case already
    /// has a stored polygon, re-assesses that polygon under the new
    /// coverage. Rapid successive calls are safe: the coordinator's
    /// latest-wins rule discards superseded responses.
    pub async fn coverage_changed(&self, value: f64) -> Result<(), WorkbenchError> {
        if !value.is_finite() || value < 0.0 {
            return Err(WorkbenchError::InvalidCoverage(value));
        }

        *self.coverage.write().await = value;

        let Some(case) = self.cases.selected_case().await else {
            return Ok(());
        };
        let Some(polygon) = case.polygon else {
            return Ok(());
        };

        self.coordinator
            .request_assessment(case.id, polygon, value)
            .await;
        Ok(())
    }

    // ========================================================================
    // Read surface
    // ========================================================================

    /// Current session coverage multiplier
    pub async fn coverage(&self) -> f64 {
        *self.coverage.read().await
    }

    /// Snapshot of all cases in insertion order
    pub async fn cases(&self) -> Vec<Case> {
        self.cases.cases().await
    }

    /// Snapshot of all claims in insertion order
    pub async fn claims(&self) -> Vec<Claim> {
        self.claims.claims().await
    }

    /// The selected case, if any
    pub async fn selected_case(&self) -> Option<Case> {
        self.cases.selected_case().await
    }

    /// True while an assessment for the case is outstanding
    pub async fn pending(&self, id: CaseId) -> bool {
        self.coordinator.pending(id).await
    }

    /// Cases with assessments outstanding
    pub async fn pending_cases(&self) -> Vec<CaseId> {
        self.coordinator.pending_cases().await
    }

    /// The recorded assessment error for the case, if any
    pub async fn assessment_error(&self, id: CaseId) -> Option<String> {
        self.coordinator.error(id).await
    }

    /// All recorded assessment errors by case
    pub async fn assessment_errors(&self) -> std::collections::HashMap<CaseId, String> {
        self.coordinator.errors().await
    }

    /// Re-derives the portfolio aggregates
    pub async fn portfolio(&self) -> PortfolioView {
        let cases = self.cases.cases().await;
        let claims = self.claims.claims().await;
        PortfolioView::build(&cases, &claims)
    }
}
