//! Peril taxonomy for crop risk
//!
//! Perils are the named risk categories the scoring service reports against
//! and claims are filed under. The set is closed: payloads naming anything
//! else are rejected at the wire boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named crop-risk category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Peril {
    Drought,
    Flood,
    Hail,
    Frost,
    Pestilence,
}

impl Peril {
    /// All perils, in display order
    pub const ALL: [Peril; 5] = [
        Peril::Drought,
        Peril::Flood,
        Peril::Hail,
        Peril::Frost,
        Peril::Pestilence,
    ];

    /// Returns the lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Peril::Drought => "drought",
            Peril::Flood => "flood",
            Peril::Hail => "hail",
            Peril::Frost => "frost",
            Peril::Pestilence => "pestilence",
        }
    }
}

impl fmt::Display for Peril {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown peril name
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown peril: {0}")]
pub struct UnknownPeril(pub String);

impl FromStr for Peril {
    type Err = UnknownPeril;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drought" => Ok(Peril::Drought),
            "flood" => Ok(Peril::Flood),
            "hail" => Ok(Peril::Hail),
            "frost" => Ok(Peril::Frost),
            "pestilence" => Ok(Peril::Pestilence),
            other => Err(UnknownPeril(other.to_string())),
        }
    }
}
