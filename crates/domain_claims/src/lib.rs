//! Claims Domain
//!
//! This crate owns the ordered, append-only log of filed claims. A claim
//! references its case by name only (a soft reference that may outlive the
//! case) and is immutable once accepted.

pub mod claim;
pub mod error;
pub mod store;

pub use claim::{Claim, ClaimSubmission};
pub use error::ClaimError;
pub use store::ClaimStore;
