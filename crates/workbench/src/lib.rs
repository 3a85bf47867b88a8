//! Underwriting Workbench Core
//!
//! This crate wires the case and claim stores, the risk synchronization
//! coordinator, and the portfolio aggregator behind one facade, the
//! contract the (out-of-scope) UI layer calls into.
//!
//! # Risk synchronization
//!
//! Polygon draws and coverage changes both funnel into
//! `RiskSyncCoordinator::request_assessment`. Requests per case are tagged
//! with monotonically increasing sequence numbers; results are applied only
//! for the highest issue so far, so rapid edits (e.g. coverage-slider
//! drags) can never regress the stored result, whatever order the service
//! answers in.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod facade;

pub use config::WorkbenchConfig;
pub use coordinator::RiskSyncCoordinator;
pub use error::WorkbenchError;
pub use facade::{Workbench, DEFAULT_COVERAGE};
