//! Claims domain errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Missing required claim field: {0}")]
    MissingField(&'static str),

    #[error("Claim amount must be non-negative, got {0}")]
    NegativeAmount(Decimal),
}
