//! Storage configuration.

use serde::Deserialize;

/// Attribution storage settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Whether SQLite-backed attribution storage is active.
    #[serde(default)]
    pub enabled: bool,
    /// Path to the SQLite database file.
    pub path: Option<String>,
}
