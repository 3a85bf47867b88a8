//! Shared test utilities for the workbench test suite
//!
//! Provides fixtures, builders, and a tracing initializer so tests across
//! crates construct consistent data without repeating setup.

pub mod builders;
pub mod fixtures;

pub use builders::RiskResultBuilder;
pub use fixtures::{GeoFixtures, MoneyFixtures, TemporalFixtures};

/// Initializes tracing for a test run
///
/// Safe to call from every test; only the first call installs the
/// subscriber. Respects `RUST_LOG` via the env filter.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
