//! Application configuration management.
//!
//! Persisted defaults for the catalogue and report paths, stored as JSON
//! in the platform config directory. A missing or unreadable config file
//! silently falls back to the built-in defaults; CLI flags and prompts
//! always override whatever the config supplies.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_catalogue_path() -> PathBuf {
    PathBuf::from("catalogue.json")
}

fn default_report_path() -> PathBuf {
    PathBuf::from("duplicates.csv")
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default catalogue storage path.
    #[serde(default = "default_catalogue_path")]
    pub catalogue_path: PathBuf,
    /// Default duplicate report destination.
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalogue_path: default_catalogue_path(),
            report_path: default_report_path(),
        }
    }
}

impl Config {
    /// Load the configuration from the default platform-specific path.
    pub fn load() -> Self {
        match Self::load_internal() {
            Ok(config) => config,
            Err(e) => {
                log::debug!("failed to load config, using defaults: {e}");
                Self::default()
            }
        }
    }

    fn load_internal() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("io", "filecat", "filecat")
            .ok_or_else(|| anyhow::anyhow!("failed to determine project directories"))?;
        Ok(project_dirs.config_dir().join("config.json"))
    }
}
