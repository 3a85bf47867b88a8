//! Case aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CaseId, FieldPolygon, RiskResult};

/// One underwritten field under risk assessment
///
/// A case starts with no geometry and no assessment. `polygon` and
/// `risk_result` are only ever written together, so a present result was
/// always computed from the stored polygon (staleness is possible only
/// while a request is in flight).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    /// Unique identifier
    pub id: CaseId,
    /// Display name, unique within the store (case-insensitive)
    pub name: String,
    /// Drawn field boundary, if any
    pub polygon: Option<FieldPolygon>,
    /// Latest applied assessment, if any
    pub risk_result: Option<RiskResult>,
    /// Creation timestamp
    pub created: DateTime<Utc>,
}

impl Case {
    /// Creates a fresh case with no polygon and no assessment
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CaseId::new(),
            name: name.into(),
            polygon: None,
            risk_result: None,
            created: Utc::now(),
        }
    }

    /// Returns true once a successful assessment has been applied
    pub fn has_assessment(&self) -> bool {
        self.risk_result.is_some()
    }
}
