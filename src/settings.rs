//! Persistent defaults for the command line
//!
//! Stored in ~/.config/partsplit/config.json. Every field is optional in the
//! file; missing fields and a missing file both fall back to defaults.

use crate::config::{EmptySourcePolicy, OverwritePolicy};
use crate::{Error, Result, DEFAULT_SIZE_MIB};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User defaults applied before command-line flags
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Part size in mebibytes when `--size` is not given
    pub default_size_mib: i64,
    pub overwrite: OverwritePolicy,
    pub empty_source: EmptySourcePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_size_mib: DEFAULT_SIZE_MIB,
            overwrite: OverwritePolicy::default(),
            empty_source: EmptySourcePolicy::default(),
        }
    }
}

impl Settings {
    /// Default settings file location
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not find config directory".into()))?;
        Ok(config_dir.join("partsplit").join("config.json"))
    }

    /// Load from `path`, or from the default location when `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };
        Self::load_from(&path)
    }

    /// Load from an explicit file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Write to an explicit file, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config dir: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write {}: {}", path.display(), e)))
    }
}
