//! Claim record and submission validation

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, Peril};

use crate::error::ClaimError;

/// A filed claim
///
/// Immutable once created; the store only appends. `case_name` is a soft
/// reference: the named case may have been deleted since filing, and no
/// referential check is performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Name of the case the loss was filed against
    pub case_name: String,
    /// Date of loss
    pub date: NaiveDate,
    /// Claimed amount
    pub amount: Decimal,
    /// Peril the loss is attributed to
    pub peril: Peril,
    /// Free-form adjuster notes
    pub notes: Option<String>,
}

/// Unvalidated claim input from the UI boundary
///
/// All business fields are optional here; `validate` turns a complete
/// submission into a `Claim` or rejects it without side effects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClaimSubmission {
    pub case_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub peril: Option<Peril>,
    pub notes: Option<String>,
}

impl ClaimSubmission {
    /// Validates the submission into an immutable claim
    pub fn validate(self) -> Result<Claim, ClaimError> {
        let case_name = self
            .case_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or(ClaimError::MissingField("caseName"))?;
        let date = self.date.ok_or(ClaimError::MissingField("date"))?;
        let amount = self.amount.ok_or(ClaimError::MissingField("amount"))?;
        let peril = self.peril.ok_or(ClaimError::MissingField("peril"))?;

        if amount.is_sign_negative() {
            return Err(ClaimError::NegativeAmount(amount));
        }

        Ok(Claim {
            id: ClaimId::new(),
            case_name,
            date,
            amount,
            peril,
            notes: self.notes,
        })
    }
}
