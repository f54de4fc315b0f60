use crate::config::default_streams_program;

use serde::Deserialize;

/// Stream listing tool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StreamsConfig {
    /// `pactl`-compatible executable.
    #[serde(default = "default_streams_program")]
    pub program: String,
}

impl Default for StreamsConfig {
    fn default() -> Self {
        Self {
            program: default_streams_program(),
        }
    }
}
