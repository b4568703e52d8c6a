//! Convenient imports for runstore.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```ignore
//! use runstore::prelude::*;
//!
//! let store = FileRunStore::new("/var/lib/profiles");
//! let id = store.save_run(&json!({"main()": {"ct": 1}}), &"myapp".into(), None)?;
//! ```

// Storage contract and backends
pub use crate::store::{FileRunStore, FileRunStoreBuilder, MemoryRunStore, RunStore};

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use crate::types::{Namespace, RunId, RunLookup, RunSummary};

// Configuration
pub use crate::config::StoreConfig;

// Re-export serde_json for convenience
pub use serde_json::json;
