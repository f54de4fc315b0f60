//! Blocking execution of external tools.

use crate::{CoreResult, MixerError};

use std::{io::ErrorKind, panic::Location, process::Command};

use error_location::ErrorLocation;
use tracing::{debug, error};

/// Run `program` with `args`, wait for it to exit and return its stdout.
///
/// Output is decoded lossily as UTF-8. A non-zero exit status is an error
/// carrying the trimmed stderr.
#[track_caller]
pub(crate) fn run_command(program: &str, args: &[&str]) -> CoreResult<String> {
    let location = Location::caller();

    debug!(program, ?args, "Running command");

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => MixerError::CommandNotFound {
                program: program.to_string(),
                location: ErrorLocation::from(location),
            },
            _ => MixerError::CommandSpawnFailed {
                program: program.to_string(),
                source: e,
                location: ErrorLocation::from(location),
            },
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        error!(program, status = %output.status, stderr = %stderr, "Command exited with failure");

        return Err(MixerError::CommandFailed {
            program: program.to_string(),
            status: output.status.to_string(),
            stderr,
            location: ErrorLocation::from(location),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
