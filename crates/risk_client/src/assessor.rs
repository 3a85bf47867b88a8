//! Risk assessor port
//!
//! The scoring service is a consumed capability: the workbench sends a field
//! polygon plus a coverage multiplier and gets back a structured
//! `RiskResult`, or a failure. Implementations can be the HTTP adapter or a
//! scripted mock.

use async_trait::async_trait;

use core_kernel::{FieldPolygon, RiskResult};

use crate::error::AssessmentError;

/// Port to the remote risk-scoring service
///
/// `assess` suspends only at the network boundary and must eventually
/// resolve or reject; the coordinator does not cancel in-flight calls.
#[async_trait]
pub trait RiskAssessor: Send + Sync {
    /// Scores one field polygon under the given coverage multiplier
    async fn assess(
        &self,
        polygon: &FieldPolygon,
        coverage: f64,
    ) -> Result<RiskResult, AssessmentError>;
}
