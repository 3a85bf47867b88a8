//! Portfolio aggregation
//!
//! Pure, synchronous functions over case and claim snapshots. Nothing here
//! caches: every read re-derives its answer from the collections, so the
//! aggregates can never go stale relative to the stores.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{CaseId, Peril};
use domain_case::Case;
use domain_claims::Claim;

use crate::severity::{Severity, HIGH_RISK_THRESHOLD};

/// Default length of the recent-claims view
pub const DEFAULT_RECENT_CLAIMS: usize = 5;

/// Sum of premiums over assessed cases; unassessed cases contribute zero
pub fn total_insured_value(cases: &[Case]) -> Decimal {
    cases
        .iter()
        .filter_map(|c| c.risk_result.as_ref())
        .map(|r| r.premium)
        .sum()
}

/// Per-peril premium totals across all assessed cases
///
/// A peril appears in the result iff some case carries a premium for it; a
/// case without that peril contributes nothing to its total.
pub fn peril_exposure(cases: &[Case]) -> BTreeMap<Peril, Decimal> {
    let mut exposure = BTreeMap::new();
    for result in cases.iter().filter_map(|c| c.risk_result.as_ref()) {
        for (peril, premium) in &result.peril_premiums {
            *exposure.entry(*peril).or_insert(Decimal::ZERO) += *premium;
        }
    }
    exposure
}

/// Assessed, drawn cases whose score is strictly above the high threshold
///
/// Collection order is preserved. A score of exactly 0.6 is not a hotspot.
pub fn hotspots(cases: &[Case]) -> Vec<&Case> {
    cases
        .iter()
        .filter(|c| c.polygon.is_some())
        .filter(|c| {
            c.risk_result
                .as_ref()
                .is_some_and(|r| r.risk_score > HIGH_RISK_THRESHOLD)
        })
        .collect()
}

/// Last `n` claims, most recently filed first (insertion order, not date)
pub fn recent_claims(claims: &[Claim], n: usize) -> Vec<&Claim> {
    claims.iter().rev().take(n).collect()
}

/// Claimed-loss totals per peril across the whole log
pub fn claim_totals_by_peril(claims: &[Claim]) -> BTreeMap<Peril, Decimal> {
    let mut totals = BTreeMap::new();
    for claim in claims {
        *totals.entry(claim.peril).or_insert(Decimal::ZERO) += claim.amount;
    }
    totals
}

/// One hotspot row as rendered by the UI
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hotspot {
    pub id: CaseId,
    pub name: String,
    pub risk_score: f64,
    pub severity: Severity,
}

/// The aggregate view backing the portfolio screen
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioView {
    pub total_insured_value: Decimal,
    pub peril_exposure: BTreeMap<Peril, Decimal>,
    pub hotspots: Vec<Hotspot>,
    pub recent_claims: Vec<Claim>,
    pub claim_totals_by_peril: BTreeMap<Peril, Decimal>,
}

impl PortfolioView {
    /// Re-derives every aggregate from the given snapshots
    pub fn build(cases: &[Case], claims: &[Claim]) -> Self {
        let hotspots = hotspots(cases)
            .into_iter()
            .map(|c| {
                let score = c
                    .risk_result
                    .as_ref()
                    .map(|r| r.risk_score)
                    .unwrap_or_default();
                Hotspot {
                    id: c.id,
                    name: c.name.clone(),
                    risk_score: score,
                    severity: Severity::band(score),
                }
            })
            .collect();

        Self {
            total_insured_value: total_insured_value(cases),
            peril_exposure: peril_exposure(cases),
            hotspots,
            recent_claims: recent_claims(claims, DEFAULT_RECENT_CLAIMS)
                .into_iter()
                .cloned()
                .collect(),
            claim_totals_by_peril: claim_totals_by_peril(claims),
        }
    }
}
