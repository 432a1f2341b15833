//! # Configuration State
//!
//! Where the records file lives, where reports go, and the unit label.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CAMEL_DATA_FILE=/srv/butchery/camel_records.csv                    │
//! │     CAMEL_REPORT_DIR=/srv/butchery/reports                             │
//! │     CAMEL_CURRENCY=KES                                                 │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $CAMEL_CONFIG, or                                                  │
//! │     ~/.config/camel-books/dashboard.toml (Linux)                       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     ./camel_records.csv, reports in ., label KES                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # dashboard.toml
//! data_file = "/srv/butchery/camel_records.csv"
//! report_dir = "/srv/butchery/reports"
//! currency_label = "KES"
//! ```
//!
//! Read-only after startup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "dashboard.toml";

pub const ENV_CONFIG: &str = "CAMEL_CONFIG";
pub const ENV_DATA_FILE: &str = "CAMEL_DATA_FILE";
pub const ENV_REPORT_DIR: &str = "CAMEL_REPORT_DIR";
pub const ENV_CURRENCY: &str = "CAMEL_CURRENCY";

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Records file. Relative paths resolve against the working directory.
    pub data_file: PathBuf,

    /// Directory that receives `Camel_Report_YYYYMMDD.pdf`.
    pub report_dir: PathBuf,

    /// Unit label appended to displayed totals.
    pub currency_label: String,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            data_file: PathBuf::from("camel_records.csv"),
            report_dir: PathBuf::from("."),
            currency_label: camel_core::DEFAULT_CURRENCY_LABEL.to_string(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`dashboard.toml`)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`ConfigState::load`] with the environment read through `lookup`.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading dashboard config from file");
                let contents = std::fs::read_to_string(&path).map_err(|e| {
                    AppError::config(format!("Cannot read {}: {}", path.display(), e))
                })?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load dashboard config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(AppError::config("data_file must not be empty"));
        }
        if self.currency_label.trim().is_empty() {
            return Err(AppError::config("currency_label must not be empty"));
        }
        Ok(())
    }

    /// Applies overrides from a variable lookup (the process environment in
    /// production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_DATA_FILE) {
            debug!(path = %path, "Overriding data file from environment");
            self.data_file = PathBuf::from(path);
        }

        if let Some(dir) = lookup(ENV_REPORT_DIR) {
            debug!(dir = %dir, "Overriding report directory from environment");
            self.report_dir = PathBuf::from(dir);
        }

        if let Some(label) = lookup(ENV_CURRENCY) {
            self.currency_label = label;
        }
    }

    /// `$CAMEL_CONFIG` if set.
    pub fn config_path_from_env() -> Option<PathBuf> {
        std::env::var_os(ENV_CONFIG).map(PathBuf::from)
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        crate::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
