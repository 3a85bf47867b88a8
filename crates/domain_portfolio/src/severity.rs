//! Severity banding
//!
//! Fixed design constants used consistently wherever severity buckets are
//! shown. The high band is strictly above the threshold: a score of exactly
//! 0.6 is Medium.

use serde::{Deserialize, Serialize};

/// A case is a hotspot strictly above this score
pub const HIGH_RISK_THRESHOLD: f64 = 0.6;

/// Lower bound (strict) of the medium band
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.3;

/// Severity bucket for a risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Buckets a risk score
    pub fn band(score: f64) -> Self {
        if score > HIGH_RISK_THRESHOLD {
            Severity::High
        } else if score > MEDIUM_RISK_THRESHOLD {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_are_strict() {
        assert_eq!(Severity::band(0.6), Severity::Medium);
        assert_eq!(Severity::band(0.61), Severity::High);
        assert_eq!(Severity::band(0.3), Severity::Low);
        assert_eq!(Severity::band(0.31), Severity::Medium);
    }

    #[test]
    fn test_band_extremes() {
        assert_eq!(Severity::band(0.0), Severity::Low);
        assert_eq!(Severity::band(1.0), Severity::High);
    }
}
