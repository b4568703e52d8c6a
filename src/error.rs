//! Unified error types for runstore.
//!
//! This module provides the canonical error type for all store operations.
//! Note what is deliberately *not* here: a missing run is a defined lookup
//! outcome (see [`RunLookup`](crate::types::RunLookup)), and an unresolvable
//! storage directory is recovered at construction time with a fallback, so
//! neither condition is an error variant.

use std::path::PathBuf;
use thiserror::Error;

/// All runstore errors.
///
/// This is the canonical error type for all store operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Run file could not be opened or written during a save.
    ///
    /// The run was NOT persisted. Unlike older run stores that handed back a
    /// run id regardless, this failure is always surfaced to the caller.
    #[error("write failed for {path}: {source}")]
    WriteFailed {
        /// Path the store attempted to write
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// Stored bytes exist but could not be decoded back into a payload.
    #[error("corrupt run data in {path}: {reason}")]
    Corrupt {
        /// Path of the offending file
        path: PathBuf,
        /// Decoder's explanation
        reason: String,
    },

    /// I/O error while reading or enumerating existing run files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload could not be encoded
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for runstore operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error means a save did not reach the filesystem.
    pub fn is_write_failed(&self) -> bool {
        matches!(self, Error::WriteFailed { .. })
    }

    /// Check if this error means stored data failed to decode.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Error::Corrupt { .. })
    }
}

// Convert from serde_json errors (payload encoding)
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
