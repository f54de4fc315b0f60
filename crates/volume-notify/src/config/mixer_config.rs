use crate::config::{default_mixer_program, default_step};

use serde::Deserialize;

/// Mixer tool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MixerConfig {
    /// Mixer executable (name on `PATH` or absolute path).
    #[serde(default = "default_mixer_program")]
    pub program: String,

    /// Percentage points applied per `up` / `down`.
    #[serde(default = "default_step")]
    pub step: u32,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            program: default_mixer_program(),
            step: default_step(),
        }
    }
}
