//! Risk Assessment Client
//!
//! This crate defines the port to the remote risk-scoring service and its
//! adapters. Scoring itself is opaque: the workbench sends a GeoJSON field
//! polygon and a coverage multiplier, the service answers with a
//! `RiskResult` (overall score, premium, optional per-peril breakdown, and
//! an opaque report).
//!
//! Adapters:
//! - `HttpRiskAssessor`: production adapter over reqwest
//! - `ScriptedAssessor`: deterministic mock for tests (behind the `mock`
//!   feature)

pub mod assessor;
pub mod error;
pub mod http;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use assessor::RiskAssessor;
pub use error::AssessmentError;
pub use http::{HttpRiskAssessor, RiskServiceConfig};
#[cfg(any(test, feature = "mock"))]
pub use mock::ScriptedAssessor;
