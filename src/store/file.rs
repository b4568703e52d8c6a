//! Filesystem-backed run store.
//!
//! One JSON document per run, named `<run_id>.<namespace>.<suffix>`. The
//! triple-part name is load-bearing: it encodes both halves of the run's
//! identity directly in the filename, so enumeration recovers id and
//! namespace without a separate index and two namespaces never collide on
//! the same run id.

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::store::RunStore;
use crate::types::{Namespace, RunId, RunLookup, RunSummary};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File suffix used when none is configured.
///
/// Kept for interoperability with run files produced by the original
/// uprofiler tooling.
pub const DEFAULT_SUFFIX: &str = "uprofiler";

/// Filesystem-backed [`RunStore`].
///
/// Holds no state beyond its directory and suffix: no cache, no index, no
/// background work. Every operation is a synchronous whole-file read or
/// write.
///
/// Writes are not atomic and take no locks. Concurrent saves to the same
/// `(run_id, namespace)` race with last-write-wins, and a crash mid-write can
/// leave a truncated file. Acceptable for a single-shot local tool; use a
/// different backend if you need stronger guarantees.
///
/// # Example
///
/// ```ignore
/// use runstore::prelude::*;
///
/// let store = FileRunStore::new("/var/lib/profiles");
/// let id = store.save_run(&json!({"main()": {"ct": 1, "wt": 120}}), &"myapp".into(), None)?;
/// let lookup = store.get_run(&id, &"myapp".into())?;
/// assert!(lookup.is_found());
/// ```
#[derive(Debug, Clone)]
pub struct FileRunStore {
    /// Storage root. May be empty, meaning the current working directory.
    directory: PathBuf,
    /// Filename tag, constant for the store's lifetime.
    suffix: String,
}

impl FileRunStore {
    /// Create a store writing to the given directory with the default suffix.
    pub fn new(directory: impl AsRef<Path>) -> Self {
        FileRunStore {
            directory: directory.as_ref().to_path_buf(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }

    /// Create a builder for store configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = FileRunStore::builder()
    ///     .config(&config)
    ///     .suffix("profile")
    ///     .build();
    /// ```
    pub fn builder() -> FileRunStoreBuilder {
        FileRunStoreBuilder::new()
    }

    /// Get the storage directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Get the filename suffix.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Derive the file path for a `(run_id, namespace)` pair.
    ///
    /// Deterministic: `<directory>/<run_id>.<namespace>.<suffix>`, with the
    /// directory segment omitted when the directory is empty. Ids or
    /// namespaces containing `.` produce names that `list_runs` cannot parse
    /// back; callers are expected not to use them.
    pub fn file_name(&self, run_id: &RunId, namespace: &Namespace) -> PathBuf {
        self.directory
            .join(format!("{}.{}.{}", run_id, namespace, self.suffix))
    }

    /// Parse `(run_id, namespace)` back out of a run file name.
    ///
    /// Returns `None` for files that do not carry the store's suffix or lack
    /// the three dot-separated segments of the naming scheme.
    fn parse_file_name(&self, name: &str) -> Option<(RunId, Namespace)> {
        let stem = name
            .strip_suffix(self.suffix.as_str())
            .and_then(|s| s.strip_suffix('.'))?;
        let mut parts = stem.split('.');
        match (parts.next(), parts.next()) {
            (Some(run_id), Some(namespace)) => {
                Some((RunId::new(run_id), Namespace::new(namespace)))
            }
            _ => None,
        }
    }

    /// Directory to scan during listing.
    ///
    /// An empty directory means the current working directory, matching what
    /// `file_name` produces for saves.
    fn scan_directory(&self) -> &Path {
        if self.directory.as_os_str().is_empty() {
            Path::new(".")
        } else {
            &self.directory
        }
    }
}

impl RunStore for FileRunStore {
    fn save_run(
        &self,
        payload: &Value,
        namespace: &Namespace,
        run_id: Option<RunId>,
    ) -> Result<RunId> {
        let run_id = run_id.unwrap_or_else(RunId::generate);
        let path = self.file_name(&run_id, namespace);

        let encoded = serde_json::to_string(payload)?;

        // Whole-file truncating write; any prior run under this key is gone.
        fs::write(&path, encoded).map_err(|source| {
            warn!(
                "could not save run {} (namespace {}) to {}: {}",
                run_id,
                namespace,
                path.display(),
                source
            );
            Error::WriteFailed {
                path: path.clone(),
                source,
            }
        })?;

        debug!("saved run {} to {}", run_id, path.display());
        Ok(run_id)
    }

    fn get_run(&self, run_id: &RunId, namespace: &Namespace) -> Result<RunLookup> {
        let path = self.file_name(run_id, namespace);

        if !path.exists() {
            debug!("no run file at {}", path.display());
            return Ok(RunLookup::not_found(run_id, namespace));
        }

        let raw = fs::read_to_string(&path)?;
        let payload: Value = serde_json::from_str(&raw).map_err(|e| Error::Corrupt {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        Ok(RunLookup::found(payload, run_id, namespace))
    }

    fn list_runs(&self) -> Result<Vec<RunSummary>> {
        let directory = self.scan_directory();
        if !directory.exists() {
            return Ok(Vec::new());
        }

        let mut runs = Vec::new();
        for entry in fs::read_dir(directory)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some((run_id, namespace)) = self.parse_file_name(&name.to_string_lossy())
            else {
                continue;
            };

            // A file can disappear between the scan and the stat; skip it
            // rather than failing the whole listing.
            let modified = match entry.metadata().and_then(|m| m.modified()) {
                Ok(mtime) => DateTime::<Utc>::from(mtime),
                Err(e) => {
                    warn!(
                        "skipping {} during listing: {}",
                        entry.path().display(),
                        e
                    );
                    continue;
                }
            };

            runs.push(RunSummary {
                run_id,
                namespace,
                modified,
            });
        }

        // Most recently written first; run id breaks mtime ties so the order
        // is deterministic.
        runs.sort_by(|a, b| {
            b.modified
                .cmp(&a.modified)
                .then_with(|| a.run_id.as_str().cmp(b.run_id.as_str()))
        });
        Ok(runs)
    }
}

/// Builder for [`FileRunStore`] configuration.
///
/// Resolution order for the storage directory: explicit
/// [`directory`](FileRunStoreBuilder::directory), then the injected
/// [`StoreConfig`]'s `output_dir`, then the system temporary directory with a
/// warning. Construction never fails.
#[derive(Debug, Default)]
pub struct FileRunStoreBuilder {
    directory: Option<PathBuf>,
    config: Option<StoreConfig>,
    suffix: Option<String>,
}

impl FileRunStoreBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storage directory explicitly.
    pub fn directory(mut self, directory: impl AsRef<Path>) -> Self {
        self.directory = Some(directory.as_ref().to_path_buf());
        self
    }

    /// Provide a configuration to consult when no directory is set.
    pub fn config(mut self, config: &StoreConfig) -> Self {
        self.config = Some(config.clone());
        self
    }

    /// Override the filename suffix (default: [`DEFAULT_SUFFIX`]).
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Build the store, resolving the directory.
    pub fn build(self) -> FileRunStore {
        let directory = self
            .directory
            .or_else(|| self.config.and_then(|c| c.output_dir))
            .unwrap_or_else(|| {
                let fallback = std::env::temp_dir();
                warn!(
                    "no output directory configured for run storage, using {}",
                    fallback.display()
                );
                fallback
            });

        FileRunStore {
            directory,
            suffix: self.suffix.unwrap_or_else(|| DEFAULT_SUFFIX.to_string()),
        }
    }
}
