//! Risk synchronization coordinator
//!
//! Turns polygon/coverage edits into assessment requests and reconciles the
//! asynchronous results into the case store without races. Per case, each
//! request is tagged with a monotonically increasing sequence number; a
//! result is applied only if its number is the highest issued so far for
//! that case, so a superseded response can never overwrite a newer one
//! regardless of network completion order. In-flight calls are never
//! cancelled; stale responses are simply dropped on arrival.
//!
//! State machine per case: `Idle -> Pending -> Idle` (result applied, or
//! error recorded). Re-entrant, no terminal state, no cross-case ordering.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

use core_kernel::{CaseId, FieldPolygon, RiskResult};
use domain_case::CaseStore;
use risk_client::{AssessmentError, RiskAssessor};

#[derive(Debug, Default, Clone, Copy)]
struct CaseSync {
    /// Highest sequence number issued for this case
    issued: u64,
    /// Requests issued but not yet reconciled
    in_flight: u32,
}

/// Coordinates assessment requests and result reconciliation per case
pub struct RiskSyncCoordinator {
    cases: Arc<CaseStore>,
    assessor: Arc<dyn RiskAssessor>,
    state: Mutex<HashMap<CaseId, CaseSync>>,
    errors: RwLock<HashMap<CaseId, String>>,
}

impl RiskSyncCoordinator {
    /// Creates a coordinator writing into the given case store
    pub fn new(cases: Arc<CaseStore>, assessor: Arc<dyn RiskAssessor>) -> Self {
        Self {
            cases,
            assessor,
            state: Mutex::new(HashMap::new()),
            errors: RwLock::new(HashMap::new()),
        }
    }

    /// Requests an assessment and reconciles its outcome
    ///
    /// The returned future resolves once reconciliation has finished; the UI
    /// layer is expected to spawn it and observe progress through
    /// `pending` / `error` / the case store. Concurrent calls for the same
    /// case are safe: only the newest issue can apply its result.
    pub async fn request_assessment(&self, case_id: CaseId, polygon: FieldPolygon, coverage: f64) {
        let seq = self.begin(case_id).await;
        debug!(case = %case_id, seq, coverage, "assessment requested");

        let outcome = self.assessor.assess(&polygon, coverage).await;
        self.reconcile(case_id, seq, polygon, outcome).await;
    }

    /// Returns true while any request for the case is outstanding
    pub async fn pending(&self, case_id: CaseId) -> bool {
        self.state
            .lock()
            .await
            .get(&case_id)
            .is_some_and(|s| s.in_flight > 0)
    }

    /// Cases with outstanding requests
    pub async fn pending_cases(&self) -> Vec<CaseId> {
        self.state
            .lock()
            .await
            .iter()
            .filter(|(_, s)| s.in_flight > 0)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Returns the recorded assessment error for a case, if any
    pub async fn error(&self, case_id: CaseId) -> Option<String> {
        self.errors.read().await.get(&case_id).cloned()
    }

    /// All recorded assessment errors by case
    pub async fn errors(&self) -> HashMap<CaseId, String> {
        self.errors.read().await.clone()
    }

    /// Drops all sync and error state for a deleted case
    ///
    /// Responses still in flight for it are discarded on arrival by the
    /// store's missing-case no-op rule.
    pub async fn forget(&self, case_id: CaseId) {
        self.state.lock().await.remove(&case_id);
        self.errors.write().await.remove(&case_id);
    }

    /// Issues the next sequence number for a case and marks it pending
    async fn begin(&self, case_id: CaseId) -> u64 {
        let mut state = self.state.lock().await;
        let entry = state.entry(case_id).or_default();
        entry.issued += 1;
        entry.in_flight += 1;
        entry.issued
    }

    /// Applies or discards one completed request
    ///
    /// Outcomes of superseded requests, successes and failures alike, are
    /// discarded, so the UI can never regress to an older result or surface
    /// an error for a request the user has already replaced.
    async fn reconcile(
        &self,
        case_id: CaseId,
        seq: u64,
        polygon: FieldPolygon,
        outcome: Result<RiskResult, AssessmentError>,
    ) {
        let latest = {
            let mut state = self.state.lock().await;
            let Some(entry) = state.get_mut(&case_id) else {
                // Case forgotten mid-flight (deleted); drop the outcome
                warn!(case = %case_id, seq, "discarding outcome for forgotten case");
                return;
            };
            entry.in_flight = entry.in_flight.saturating_sub(1);
            entry.issued
        };

        if seq != latest {
            warn!(case = %case_id, seq, latest, "stale assessment discarded");
            return;
        }

        match outcome {
            Ok(result) => {
                debug!(case = %case_id, seq, "assessment applied");
                if self.cases.apply_risk_result(case_id, polygon, result).await {
                    self.errors.write().await.remove(&case_id);
                }
            }
            Err(error) => {
                warn!(case = %case_id, seq, %error, "assessment failed");
                self.errors
                    .write()
                    .await
                    .insert(case_id, error.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infra_persistence::MemoryStore;
    use risk_client::ScriptedAssessor;
    use rust_decimal_macros::dec;
    use test_utils::{GeoFixtures, RiskResultBuilder};

    async fn setup() -> (Arc<CaseStore>, RiskSyncCoordinator, CaseId) {
        let cases = Arc::new(
            CaseStore::load(Arc::new(MemoryStore::new()))
                .await
                .unwrap(),
        );
        let coordinator =
            RiskSyncCoordinator::new(cases.clone(), Arc::new(ScriptedAssessor::new()));
        let id = cases.create_case("Field A").await.unwrap();
        (cases, coordinator, id)
    }

    fn polygon() -> FieldPolygon {
        FieldPolygon::new(GeoFixtures::square_field()).unwrap()
    }

    fn result(premium: rust_decimal::Decimal) -> RiskResult {
        RiskResultBuilder::new().with_premium(premium).build()
    }

    #[tokio::test]
    async fn test_latest_wins_across_arrival_orders() {
        let (cases, coordinator, id) = setup().await;

        // Three requests issued in order; responses arrive 3, 1, 2
        let seq1 = coordinator.begin(id).await;
        let seq2 = coordinator.begin(id).await;
        let seq3 = coordinator.begin(id).await;

        coordinator
            .reconcile(id, seq3, polygon(), Ok(result(dec!(3))))
            .await;
        coordinator
            .reconcile(id, seq1, polygon(), Ok(result(dec!(1))))
            .await;
        coordinator
            .reconcile(id, seq2, polygon(), Ok(result(dec!(2))))
            .await;

        let stored = cases.get(id).await.unwrap().risk_result.unwrap();
        assert_eq!(stored.premium, dec!(3));
    }

    #[tokio::test]
    async fn test_pending_tracks_outstanding_requests() {
        let (_, coordinator, id) = setup().await;
        assert!(!coordinator.pending(id).await);

        let seq1 = coordinator.begin(id).await;
        let seq2 = coordinator.begin(id).await;
        assert!(coordinator.pending(id).await);

        coordinator
            .reconcile(id, seq1, polygon(), Ok(result(dec!(1))))
            .await;
        assert!(coordinator.pending(id).await);

        coordinator
            .reconcile(id, seq2, polygon(), Ok(result(dec!(2))))
            .await;
        assert!(!coordinator.pending(id).await);
    }

    #[tokio::test]
    async fn test_failure_records_error_and_success_clears_it() {
        let (cases, coordinator, id) = setup().await;

        let seq = coordinator.begin(id).await;
        coordinator
            .reconcile(id, seq, polygon(), Err(AssessmentError::status(500)))
            .await;

        assert!(coordinator.error(id).await.unwrap().contains("500"));
        assert!(cases.get(id).await.unwrap().polygon.is_none());

        let seq = coordinator.begin(id).await;
        coordinator
            .reconcile(id, seq, polygon(), Ok(result(dec!(10))))
            .await;

        assert!(coordinator.error(id).await.is_none());
        assert!(cases.get(id).await.unwrap().has_assessment());
    }

    #[tokio::test]
    async fn test_stale_failure_is_not_recorded() {
        let (cases, coordinator, id) = setup().await;

        let seq1 = coordinator.begin(id).await;
        let seq2 = coordinator.begin(id).await;

        coordinator
            .reconcile(id, seq2, polygon(), Ok(result(dec!(2))))
            .await;
        coordinator
            .reconcile(id, seq1, polygon(), Err(AssessmentError::status(500)))
            .await;

        assert!(coordinator.error(id).await.is_none());
        let stored = cases.get(id).await.unwrap().risk_result.unwrap();
        assert_eq!(stored.premium, dec!(2));
    }

    #[tokio::test]
    async fn test_stale_success_does_not_clear_newer_error() {
        let (_, coordinator, id) = setup().await;

        let seq1 = coordinator.begin(id).await;
        let seq2 = coordinator.begin(id).await;

        coordinator
            .reconcile(id, seq2, polygon(), Err(AssessmentError::status(503)))
            .await;
        coordinator
            .reconcile(id, seq1, polygon(), Ok(result(dec!(1))))
            .await;

        // The stale success must neither apply nor clear the newer error
        assert!(coordinator.error(id).await.is_some());
    }

    #[tokio::test]
    async fn test_delete_during_flight_discards_outcome() {
        let (cases, coordinator, id) = setup().await;

        let seq = coordinator.begin(id).await;
        cases.delete_case(id).await.unwrap();
        coordinator.forget(id).await;

        coordinator
            .reconcile(id, seq, polygon(), Ok(result(dec!(1))))
            .await;

        assert!(cases.is_empty().await);
        assert!(!coordinator.pending(id).await);
        assert!(coordinator.error(id).await.is_none());
    }

    #[tokio::test]
    async fn test_request_assessment_end_to_end() {
        let cases = Arc::new(
            CaseStore::load(Arc::new(MemoryStore::new()))
                .await
                .unwrap(),
        );
        let assessor = Arc::new(ScriptedAssessor::new());
        assessor.push_ok(result(dec!(1200))).await;
        let coordinator = RiskSyncCoordinator::new(cases.clone(), assessor);
        let id = cases.create_case("Field A").await.unwrap();

        coordinator.request_assessment(id, polygon(), 1.0).await;

        assert!(!coordinator.pending(id).await);
        let stored = cases.get(id).await.unwrap().risk_result.unwrap();
        assert_eq!(stored.premium, dec!(1200));
    }
}
