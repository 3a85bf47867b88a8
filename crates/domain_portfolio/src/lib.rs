//! Portfolio Aggregation Domain
//!
//! Read-only derivations over the case and claim collections: total insured
//! value, exposure by peril, the high-risk hotspot list, and the
//! recent-claims view. All functions are pure and recomputed on every read.

pub mod aggregate;
pub mod severity;

pub use aggregate::{
    claim_totals_by_peril, hotspots, peril_exposure, recent_claims, total_insured_value,
    Hotspot, PortfolioView, DEFAULT_RECENT_CLAIMS,
};
pub use severity::{Severity, HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD};
