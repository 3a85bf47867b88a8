//! Test data builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use core_kernel::{Peril, RiskResult};

/// Builder for `RiskResult` payloads
pub struct RiskResultBuilder {
    risk_score: f64,
    premium: Decimal,
    perils: BTreeMap<Peril, f64>,
    peril_premiums: BTreeMap<Peril, Decimal>,
    explanations: BTreeMap<Peril, String>,
    report: Value,
}

impl Default for RiskResultBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskResultBuilder {
    /// Creates a builder for a moderate-risk result with no breakdown
    pub fn new() -> Self {
        Self {
            risk_score: 0.5,
            premium: dec!(1000),
            perils: BTreeMap::new(),
            peril_premiums: BTreeMap::new(),
            explanations: BTreeMap::new(),
            report: Value::Null,
        }
    }

    /// Sets the overall risk score
    pub fn with_score(mut self, score: f64) -> Self {
        self.risk_score = score;
        self
    }

    /// Sets the total premium
    pub fn with_premium(mut self, premium: Decimal) -> Self {
        self.premium = premium;
        self
    }

    /// Adds one peril to all three breakdown maps, keeping them aligned
    pub fn with_peril(mut self, peril: Peril, score: f64, premium: Decimal) -> Self {
        self.perils.insert(peril, score);
        self.peril_premiums.insert(peril, premium);
        self.explanations
            .insert(peril, format!("{peril} exposure for test"));
        self
    }

    /// Sets the opaque report
    pub fn with_report(mut self, report: Value) -> Self {
        self.report = report;
        self
    }

    /// Builds the risk result
    pub fn build(self) -> RiskResult {
        RiskResult {
            risk_score: self.risk_score,
            premium: self.premium,
            perils: self.perils,
            peril_premiums: self.peril_premiums,
            explanations: self.explanations,
            report: self.report,
        }
    }
}
