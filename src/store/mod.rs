//! Storage backends for profiling runs.
//!
//! The [`RunStore`] trait is the capability contract; [`FileRunStore`] is the
//! default filesystem-backed implementation and [`MemoryRunStore`] a no-disk
//! conformer for tests and ephemeral use. Alternative backings (database,
//! object storage) satisfy the same contract by implementing the trait.

mod file;
mod memory;

pub use file::{FileRunStore, FileRunStoreBuilder, DEFAULT_SUFFIX};
pub use memory::MemoryRunStore;

use crate::error::Result;
use crate::types::{Namespace, RunId, RunLookup, RunSummary};
use serde_json::Value;

/// Persistence capability for profiling run records.
///
/// A run is an opaque structured payload identified by `(run_id, namespace)`.
/// The store treats the payload as a serializable blob and never interprets
/// its structure. The trait is object-safe: callers that want to stay
/// medium-agnostic can hold a `Box<dyn RunStore>`.
pub trait RunStore {
    /// Durably persist a payload, returning the id it is now stored under.
    ///
    /// When `run_id` is `None` the store generates one that is practically
    /// unique within the namespace. A caller-supplied id is trusted: saving
    /// under an existing `(run_id, namespace)` silently overwrites the prior
    /// run (last-write-wins, no versioning).
    ///
    /// # Errors
    ///
    /// [`Error::Serialization`](crate::Error::Serialization) if the payload
    /// cannot be encoded, [`Error::WriteFailed`](crate::Error::WriteFailed)
    /// if the record could not be persisted. A returned id always means the
    /// run is durable.
    fn save_run(
        &self,
        payload: &Value,
        namespace: &Namespace,
        run_id: Option<RunId>,
    ) -> Result<RunId>;

    /// Retrieve a previously saved run.
    ///
    /// A missing run is a normal outcome, reported as
    /// [`RunLookup::not_found`] rather than an error.
    ///
    /// # Errors
    ///
    /// [`Error::Corrupt`](crate::Error::Corrupt) if stored bytes fail to
    /// decode, [`Error::Io`](crate::Error::Io) if an existing record cannot
    /// be read.
    fn get_run(&self, run_id: &RunId, namespace: &Namespace) -> Result<RunLookup>;

    /// Enumerate all stored runs, most recently written first.
    ///
    /// Read-only; the listing is only eventually consistent with concurrent
    /// writers.
    ///
    /// # Errors
    ///
    /// [`Error::Io`](crate::Error::Io) if the backing medium cannot be
    /// scanned.
    fn list_runs(&self) -> Result<Vec<RunSummary>>;
}
