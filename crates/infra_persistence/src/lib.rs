//! Infrastructure Persistence Layer
//!
//! This crate provides durable storage for the workbench collections as
//! whole-document JSON snapshots under two logical keys, `cases` and
//! `claims`.
//!
//! # Architecture
//!
//! The crate follows the ports-and-adapters pattern: the domain stores hold
//! their collections in memory and write through a `SnapshotStore` port
//! after every committed mutation. Load happens once at store construction;
//! an absent key means an empty collection.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_persistence::{JsonFileStore, SnapshotStore, CASES_KEY};
//!
//! let store = JsonFileStore::open("./data").await?;
//! let cases_json = store.load(CASES_KEY).await?;
//! ```

pub mod error;
pub mod file;
#[cfg(any(test, feature = "mock"))]
pub mod memory;
pub mod store;

pub use error::SnapshotError;
pub use file::JsonFileStore;
#[cfg(any(test, feature = "mock"))]
pub use memory::MemoryStore;
pub use store::{SnapshotStore, CASES_KEY, CLAIMS_KEY};
