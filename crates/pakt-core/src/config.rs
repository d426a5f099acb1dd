//! Global user configuration persisting the active packset.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use pakt_util::errors::PaktError;

/// File name of the global configuration, under the pakt data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Name of the packset used before any `pakt use` has run.
pub const DEFAULT_SET: &str = "default";

/// Global configuration loaded from `<data dir>/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default = "default_set", rename = "current-set")]
    pub current_set: String,
}

fn default_set() -> String {
    DEFAULT_SET.to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            current_set: default_set(),
        }
    }
}

impl GlobalConfig {
    /// Load the global configuration, or return defaults if the file doesn't
    /// exist yet.
    pub fn load() -> Result<Self, PaktError> {
        let path = Self::default_path();
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| PaktError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| PaktError::Config {
            message: format!("Failed to parse {}: {e}", path.display()),
        })
    }

    /// Write the configuration, creating the data directory if needed.
    pub fn save(&self) -> Result<(), PaktError> {
        let dir = pakt_util::dirs_path();
        pakt_util::fs::ensure_dir(&dir).map_err(PaktError::Io)?;
        let content = toml::to_string_pretty(self).map_err(|e| PaktError::Config {
            message: e.to_string(),
        })?;
        std::fs::write(dir.join(CONFIG_FILE), content).map_err(PaktError::Io)
    }

    /// Returns the path of the global config file.
    pub fn default_path() -> PathBuf {
        pakt_util::dirs_path().join(CONFIG_FILE)
    }
}
