//! Volume Notify: raise or lower the default audio sinks and show the
//! resulting level as a desktop notification.

mod app;
mod config;
mod error;
mod notification_store;
mod notifier;
#[cfg(test)]
mod tests;
mod volume_command;

pub(crate) use {
    app::App,
    error::{AppError, Result as AppResult},
    notification_store::NotificationStore,
    notifier::{DesktopNotifier, NotificationId, Notifier},
    volume_command::{USAGE, VolumeCommand},
};

use crate::config::Config;

use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;
use volume_notify_core::{PactlStreams, PulseMixer};

/// Exit status for a completed command.
const EXIT_SUCCESS: u8 = 0;
/// Exit status for missing or unrecognized arguments.
const EXIT_USAGE: u8 = 1;
/// Exit status for any failure after the command was recognized.
const EXIT_FAILURE: u8 = 2;

/// Application entry point.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("volume_notify=info,volume_notify_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    ExitCode::from(dispatch(std::env::args().skip(1), run))
}

/// Recognize the command line and hand it to `execute`, returning the exit status.
///
/// Unrecognized arguments print usage and return before `execute` is called, so
/// no config, subprocess or file access happens on that path.
pub(crate) fn dispatch<I, S, F>(args: I, execute: F) -> u8
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnOnce(VolumeCommand) -> AppResult<()>,
{
    let Some(command) = VolumeCommand::from_args(args) else {
        println!("{USAGE}");
        return EXIT_USAGE;
    };

    match execute(command) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error!(error = ?e, ?command, "Command failed");
            eprintln!("volume-notify: {e}");
            EXIT_FAILURE
        }
    }
}

fn run(command: VolumeCommand) -> AppResult<()> {
    let config = Config::load()?;

    let app = App {
        mixer: PulseMixer::new(config.mixer.program),
        streams: PactlStreams::new(config.streams.program),
        notifier: DesktopNotifier::new(config.notification.app_name.clone()),
        store: NotificationStore::new(config.notification.state_file.clone()),
        notification: config.notification,
        step: config.mixer.step,
    };

    app.run(command)
}
