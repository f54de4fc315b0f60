//! Configuration management for volume-notify.
//!
//! Reads an optional TOML file from the platform config directory. The
//! file is never written; built-in defaults apply when it is absent.

use crate::{
    AppError, AppResult,
    config::{MixerConfig, NotificationConfig, StreamsConfig},
};

use std::{fs, panic::Location, path::Path, path::PathBuf};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Mixer tool settings.
    #[serde(default)]
    pub mixer: MixerConfig,
    /// Stream listing tool settings.
    #[serde(default)]
    pub streams: StreamsConfig,
    /// Notification settings.
    #[serde(default)]
    pub notification: NotificationConfig,
}

impl Config {
    /// Load configuration from the platform config directory.
    ///
    /// Falls back to defaults when there is no config directory or no file.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from `path`, using defaults if it does not exist.
    #[track_caller]
    #[instrument]
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(config_path = ?path, "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config = Self::from_toml(&contents)?;

        info!(config_path = ?path, "Configuration loaded");

        Ok(config)
    }

    /// Parse configuration from TOML text. Missing keys take defaults.
    #[track_caller]
    pub fn from_toml(contents: &str) -> AppResult<Self> {
        toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "volume-notify", "volume-notify")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
