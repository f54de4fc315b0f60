mod mixer_config;
mod notification_config;
#[allow(clippy::module_inception)]
mod config;
mod streams_config;

pub(crate) use {
    config::Config, mixer_config::MixerConfig, notification_config::NotificationConfig,
    streams_config::StreamsConfig,
};

pub(crate) const DEFAULT_MIXER_PROGRAM: &str = "pulsemixer";
pub(crate) const DEFAULT_STEP: u32 = 10;
pub(crate) const DEFAULT_STREAMS_PROGRAM: &str = "pactl";
pub(crate) const DEFAULT_APP_NAME: &str = "myvolumecontrol";
pub(crate) const DEFAULT_TIMEOUT_MS: u32 = 2000;
pub(crate) const DEFAULT_STATE_FILE: &str = "notification_id.txt";

pub(crate) fn default_mixer_program() -> String {
    DEFAULT_MIXER_PROGRAM.to_string()
}

pub(crate) fn default_step() -> u32 {
    DEFAULT_STEP
}

pub(crate) fn default_streams_program() -> String {
    DEFAULT_STREAMS_PROGRAM.to_string()
}

pub(crate) fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

pub(crate) fn default_timeout_ms() -> u32 {
    DEFAULT_TIMEOUT_MS
}

pub(crate) fn default_state_file() -> std::path::PathBuf {
    std::path::PathBuf::from(DEFAULT_STATE_FILE)
}
