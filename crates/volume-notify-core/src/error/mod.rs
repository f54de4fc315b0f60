use crate::SinkId;

use error_location::ErrorLocation;
use thiserror::Error;

/// Mixer errors with source location tracking.
#[derive(Error, Debug)]
pub enum MixerError {
    /// External tool is not installed or not on `PATH`.
    #[error("Command not found: {program} {location}")]
    CommandNotFound {
        /// Program that could not be located.
        program: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// External tool exists but could not be started.
    #[error("Failed to spawn {program}: {source} {location}")]
    CommandSpawnFailed {
        /// Program that failed to start.
        program: String,
        /// Underlying spawn error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// External tool ran but exited unsuccessfully.
    #[error("{program} exited with {status}: {stderr} {location}")]
    CommandFailed {
        /// Program that failed.
        program: String,
        /// Exit status as reported by the OS.
        status: String,
        /// Captured standard error, trimmed.
        stderr: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Tool output did not have the expected shape.
    #[error("Unexpected tool output: {reason} {location}")]
    UnexpectedOutput {
        /// Description of what was wrong with the output.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Volume reading was not an integer percentage.
    #[error("Invalid volume value: {token:?} {location}")]
    InvalidVolume {
        /// Token that failed to parse.
        token: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No default sink is available to read from.
    #[error("No sink found {location}")]
    NoSinkFound {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// One or more sinks rejected a volume change.
    #[error("Volume change failed for sinks {failed:?} {location}")]
    AdjustFailed {
        /// Sinks whose adjustment failed, in enumeration order.
        failed: Vec<SinkId>,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`MixerError`].
pub type Result<T> = std::result::Result<T, MixerError>;
