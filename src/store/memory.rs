//! In-memory run store.
//!
//! A no-disk conformer for unit tests, caching, and ephemeral use. Loses all
//! data when dropped.

use crate::error::Result;
use crate::store::RunStore;
use crate::types::{Namespace, RunId, RunLookup, RunSummary};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;

/// A stored run plus its last-write time.
#[derive(Debug, Clone)]
struct StoredRun {
    payload: Value,
    modified: DateTime<Utc>,
}

/// In-memory [`RunStore`] backed by a map behind an `RwLock`.
///
/// Satisfies the same contract as [`FileRunStore`](crate::FileRunStore):
/// last-write-wins on `(run_id, namespace)`, namespace isolation, and
/// recency-ordered listing.
#[derive(Debug, Default)]
pub struct MemoryRunStore {
    runs: RwLock<HashMap<(String, String), StoredRun>>,
}

impl MemoryRunStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RunStore for MemoryRunStore {
    fn save_run(
        &self,
        payload: &Value,
        namespace: &Namespace,
        run_id: Option<RunId>,
    ) -> Result<RunId> {
        let run_id = run_id.unwrap_or_else(RunId::generate);
        self.runs.write().insert(
            (run_id.as_str().to_string(), namespace.as_str().to_string()),
            StoredRun {
                payload: payload.clone(),
                modified: Utc::now(),
            },
        );
        Ok(run_id)
    }

    fn get_run(&self, run_id: &RunId, namespace: &Namespace) -> Result<RunLookup> {
        let key = (run_id.as_str().to_string(), namespace.as_str().to_string());
        match self.runs.read().get(&key) {
            Some(stored) => Ok(RunLookup::found(stored.payload.clone(), run_id, namespace)),
            None => Ok(RunLookup::not_found(run_id, namespace)),
        }
    }

    fn list_runs(&self) -> Result<Vec<RunSummary>> {
        let mut runs: Vec<RunSummary> = self
            .runs
            .read()
            .iter()
            .map(|((run_id, namespace), stored)| RunSummary {
                run_id: RunId::new(run_id.clone()),
                namespace: Namespace::new(namespace.clone()),
                modified: stored.modified,
            })
            .collect();

        runs.sort_by(|a, b| {
            b.modified
                .cmp(&a.modified)
                .then_with(|| a.run_id.as_str().cmp(b.run_id.as_str()))
        });
        Ok(runs)
    }
}
