//! Risk assessment result payload
//!
//! `RiskResult` is the structured answer from the remote scoring service.
//! How the score is computed is opaque to this core; the type only enforces
//! the shape invariants the rest of the system depends on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::CoreError;
use crate::peril::Peril;

/// A per-field risk assessment as returned by the scoring service
///
/// The three peril maps carry the multi-peril breakdown and must share an
/// identical key set. The reduced service variant omits the breakdown
/// entirely, leaving all three maps empty. `report` is an opaque structured
/// map rendered by the UI as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Overall risk score in [0, 1]
    pub risk_score: f64,
    /// Total premium for the field
    pub premium: Decimal,
    /// Per-peril risk scores in [0, 1]
    #[serde(default)]
    pub perils: BTreeMap<Peril, f64>,
    /// Per-peril premium contributions
    #[serde(default)]
    pub peril_premiums: BTreeMap<Peril, Decimal>,
    /// Per-peril human-readable explanations
    #[serde(default)]
    pub explanations: BTreeMap<Peril, String>,
    /// Opaque diagnostic report from the service
    #[serde(default)]
    pub report: Value,
}

impl RiskResult {
    /// Checks the shape invariants of a decoded payload
    ///
    /// The score must lie in [0, 1] and the peril maps must agree on their
    /// key set. Callers at the wire boundary treat a violation as a
    /// malformed payload.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.risk_score.is_finite() || !(0.0..=1.0).contains(&self.risk_score) {
            return Err(CoreError::validation(format!(
                "risk_score {} outside [0, 1]",
                self.risk_score
            )));
        }

        let score_keys: Vec<Peril> = self.perils.keys().copied().collect();
        let premium_keys: Vec<Peril> = self.peril_premiums.keys().copied().collect();
        let explanation_keys: Vec<Peril> = self.explanations.keys().copied().collect();
        if score_keys != premium_keys || score_keys != explanation_keys {
            return Err(CoreError::validation(
                "peril score, premium, and explanation maps disagree on keys".to_string(),
            ));
        }

        Ok(())
    }
}
