//! Core Kernel - Foundational types for the underwriting workbench
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed case and claim identifiers
//! - The closed peril taxonomy
//! - Opaque GeoJSON field geometry
//! - The risk assessment result payload and its shape invariants

pub mod error;
pub mod geo;
pub mod identifiers;
pub mod peril;
pub mod risk;

pub use error::CoreError;
pub use geo::FieldPolygon;
pub use identifiers::{CaseId, ClaimId};
pub use peril::{Peril, UnknownPeril};
pub use risk::RiskResult;
