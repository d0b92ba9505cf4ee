//! Persistent options file structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::PackageType;

/// Environment variable overriding the configuration directory
pub const HOME_ENV: &str = "CONFSTASH_HOME";

/// Uniform extension every saved config is stored with
pub const SAVED_CONFIG_EXT: &str = "js";

/// Contents of `options.toml`
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Options {
    /// User-saved configs: name -> package the config targets
    #[serde(default)]
    pub custom_configs: BTreeMap<String, PackageType>,
}

impl Options {
    /// Get the confstash configuration directory path
    pub fn config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("confstash")
    }

    /// Path of the options file inside `dir`
    pub fn options_path(dir: &Path) -> PathBuf {
        dir.join("options.toml")
    }

    /// Directory holding the saved config files
    pub fn configs_dir(dir: &Path) -> PathBuf {
        dir.join("configs")
    }

    /// Canonical location of the saved config called `name`
    pub fn saved_config_path(dir: &Path, name: &str) -> PathBuf {
        Self::configs_dir(dir).join(format!("{}.{}", name, SAVED_CONFIG_EXT))
    }

    /// Load options from file, or return default if file doesn't exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Options::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save options to file
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
