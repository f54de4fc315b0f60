mod mixer_trait;
mod parse;
mod pulse_mixer;
mod types;
mod volume;

pub(crate) use parse::{parse_sink_list, parse_volume};

pub use {
    mixer_trait::Mixer,
    pulse_mixer::PulseMixer,
    types::{SinkFilter, SinkId, VolumeDelta, VolumePercent},
    volume::{adjust_sinks, current_volume},
};
