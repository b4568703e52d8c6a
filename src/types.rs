//! Core types for the run store.
//!
//! This module defines the fundamental types used throughout the system:
//! - [`RunId`]: identifier for one profiling run within a namespace
//! - [`Namespace`]: classification tag grouping runs by source/kind
//! - [`RunSummary`]: one enumeration record produced by `list_runs`
//! - [`RunLookup`]: the outcome of a `get_run` call

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Identifier for a single profiling run within a namespace.
///
/// Ids are either supplied by the caller or generated via [`RunId::generate`].
/// The pair `(RunId, Namespace)` uniquely determines at most one stored run.
///
/// # Examples
///
/// ```
/// use runstore::types::RunId;
///
/// let id1 = RunId::generate();
/// let id2 = RunId::generate();
/// assert_ne!(id1, id2); // Each generated id is unique
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(String);

impl RunId {
    /// Create a RunId from a caller-supplied string.
    ///
    /// The caller vouches for uniqueness within the namespace; saving under
    /// an existing id silently overwrites the prior run.
    pub fn new(id: impl Into<String>) -> Self {
        RunId(id.into())
    }

    /// Generate a fresh unique RunId using UUID v4.
    ///
    /// Collision probability is negligible across concurrent processes, so
    /// no cross-process coordination is needed.
    pub fn generate() -> Self {
        RunId(Uuid::new_v4().simple().to_string())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RunId {
    fn from(s: &str) -> Self {
        RunId(s.to_string())
    }
}

impl From<String> for RunId {
    fn from(s: String) -> Self {
        RunId(s)
    }
}

/// Classification tag grouping runs by their source or kind.
///
/// The namespace is part of the storage key: two namespaces never collide on
/// the same run id. Typically distinguishes one instrumented application
/// from another (e.g. `"myapp"`, `"checkout-service"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace(String);

impl Namespace {
    /// Create a namespace from a string.
    pub fn new(namespace: impl Into<String>) -> Self {
        Namespace(namespace.into())
    }

    /// Get the namespace as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Namespace {
    fn from(s: &str) -> Self {
        Namespace(s.to_string())
    }
}

impl From<String> for Namespace {
    fn from(s: String) -> Self {
        Namespace(s)
    }
}

/// One stored run as seen by `list_runs`.
///
/// Carries the identity recovered from the storage key plus the time the
/// record was last written. Presentation (links, HTML) is the caller's
/// concern; the store only surfaces structured records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Identifier of the run
    pub run_id: RunId,
    /// Namespace the run belongs to
    pub namespace: Namespace,
    /// When the run record was last written
    pub modified: DateTime<Utc>,
}

/// Outcome of a `get_run` call.
///
/// A missing run is a normal, reportable outcome rather than an error:
/// `payload` is `None` and `description` explains what was looked up.
/// Errors are reserved for I/O failures and corrupt stored data.
#[derive(Debug, Clone, PartialEq)]
pub struct RunLookup {
    /// The decoded payload, or `None` when no matching run exists
    pub payload: Option<Value>,
    /// Human-readable description of the run (or of the miss)
    pub description: String,
}

impl RunLookup {
    /// Build the successful outcome for a decoded payload.
    pub fn found(payload: Value, run_id: &RunId, namespace: &Namespace) -> Self {
        RunLookup {
            payload: Some(payload),
            description: format!("profiling run {run_id} in namespace {namespace}"),
        }
    }

    /// Build the defined not-found outcome.
    pub fn not_found(run_id: &RunId, namespace: &Namespace) -> Self {
        RunLookup {
            payload: None,
            description: format!("no profiling run {run_id} found in namespace {namespace}"),
        }
    }

    /// Check whether the lookup located a stored run.
    pub fn is_found(&self) -> bool {
        self.payload.is_some()
    }
}
