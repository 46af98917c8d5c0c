//! Snapshot storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the snapshot files. Empty means the platform data
    /// directory (`~/.local/share/academisync` on Linux).
    #[serde(default)]
    pub data_dir: String,
}

impl StorageConfig {
    /// Resolve the directory snapshots are read from and written to.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotConfigured`] if no directory is set and the platform
    /// has no data directory.
    pub fn resolve_data_dir(&self) -> Result<PathBuf, ConfigError> {
        if !self.data_dir.trim().is_empty() {
            return Ok(PathBuf::from(self.data_dir.trim()));
        }
        dirs::data_dir()
            .map(|dir| dir.join("academisync"))
            .ok_or(ConfigError::NotConfigured {
                section: "storage",
                hint: "no platform data directory; set storage.data_dir",
            })
    }
}
