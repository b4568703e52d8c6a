//! # runstore
//!
//! Pluggable persistence for profiling run records.
//!
//! A profiling run is an opaque structured payload (nested function/call
//! measurements) identified by an id and a namespace. runstore provides the
//! storage contract decoupling producers and consumers of that data from the
//! medium it lives on, plus the default filesystem-backed implementation.
//!
//! ## Quick Start
//!
//! ```ignore
//! use runstore::prelude::*;
//!
//! let store = FileRunStore::new("/var/lib/profiles");
//!
//! // Persist a completed profiling session
//! let id = store.save_run(
//!     &json!({"main()": {"ct": 1, "wt": 120}}),
//!     &"myapp".into(),
//!     None,
//! )?;
//!
//! // Retrieve it later
//! let lookup = store.get_run(&id, &"myapp".into())?;
//! assert!(lookup.is_found());
//!
//! // Browse everything, newest first
//! for run in store.list_runs()? {
//!     println!("{} ({}) at {}", run.run_id, run.namespace, run.modified);
//! }
//! ```
//!
//! ## Components
//!
//! - [`RunStore`] - The storage capability contract
//! - [`FileRunStore`] - Filesystem-backed default implementation
//! - [`MemoryRunStore`] - No-disk conformer for tests and ephemeral use
//!
//! Diagnostics for non-fatal conditions (directory fallback, lookup misses,
//! skipped files) are emitted as `tracing` events; install a subscriber to
//! route them.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use store::{FileRunStore, FileRunStoreBuilder, MemoryRunStore, RunStore, DEFAULT_SUFFIX};

// Re-export core types
pub use config::StoreConfig;
pub use types::{Namespace, RunId, RunLookup, RunSummary};
