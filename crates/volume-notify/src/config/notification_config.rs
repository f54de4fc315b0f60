use crate::config::{default_app_name, default_state_file, default_timeout_ms};

use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

/// Desktop notification configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotificationConfig {
    /// Application name reported to the notification server.
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Auto-dismiss timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,

    /// File remembering the last notification id. Relative paths resolve
    /// against the working directory.
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,
}

impl NotificationConfig {
    /// Auto-dismiss timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.timeout_ms))
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            timeout_ms: default_timeout_ms(),
            state_file: default_state_file(),
        }
    }
}
