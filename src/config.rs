//! Store configuration.
//!
//! Configuration is an explicit value handed to the store builder, never an
//! ambient global lookup. Callers that keep settings in a config file can
//! deserialize `StoreConfig` straight out of their own format.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration consulted when no explicit directory is passed to the
/// file store builder.
///
/// # Example
///
/// ```
/// use runstore::config::StoreConfig;
///
/// let config = StoreConfig::new().output_dir("/var/lib/profiles");
/// assert!(config.output_dir.is_some());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory where run files are written.
    ///
    /// When absent (and no explicit directory is given to the builder), the
    /// store falls back to the system temporary directory with a warning.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl StoreConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory.
    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = Some(dir.as_ref().to_path_buf());
        self
    }
}
