//! Case Lifecycle Domain
//!
//! This crate owns the ordered collection of underwriting cases and the
//! current selection. Cases are created empty, gain a polygon and a risk
//! result together when an assessment is reconciled, and are removed on
//! explicit deletion (claims referencing them are not cascaded).

pub mod case;
pub mod error;
pub mod store;

pub use case::Case;
pub use error::CaseError;
pub use store::CaseStore;
