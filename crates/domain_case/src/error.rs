//! Case domain errors

use core_kernel::CaseId;
use thiserror::Error;

/// Errors that can occur in the case domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaseError {
    #[error("Case name must not be empty")]
    EmptyName,

    #[error("A case named '{0}' already exists")]
    DuplicateName(String),

    #[error("Case not found: {0}")]
    NotFound(CaseId),
}
