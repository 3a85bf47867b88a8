//! Workbench error types

use thiserror::Error;

use domain_case::CaseError;
use domain_claims::ClaimError;
use infra_persistence::SnapshotError;
use risk_client::AssessmentError;

/// Errors surfaced at the UI boundary
///
/// Store validation errors pass through unchanged; assessment failures are
/// NOT raised here; they are recorded per case by the coordinator and read
/// back through `Workbench::assessment_error`.
#[derive(Debug, Error)]
pub enum WorkbenchError {
    #[error(transparent)]
    Case(#[from] CaseError),

    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("Risk service client error: {0}")]
    Client(#[from] AssessmentError),

    #[error("No case selected")]
    NoCaseSelected,

    #[error("Invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("Invalid coverage multiplier: {0}")]
    InvalidCoverage(f64),
}
