//! Volume Notify Core Library
//!
//! Mixer access for the `volume-notify` utility: sink enumeration, volume
//! changes and reads through external tools, plus the volume bar rendering.
//!
//! # Example
//!
//! ```no_run
//! use volume_notify_core::{CoreResult, PulseMixer, VolumeDelta, adjust_sinks, current_volume, format_volume};
//!
//! fn main() -> CoreResult<()> {
//!     let mixer = PulseMixer::new("pulsemixer");
//!
//!     adjust_sinks(&mixer, VolumeDelta::raise(10))?;
//!     let volume = current_volume(&mixer)?;
//!
//!     println!("{}", format_volume(volume));
//!     Ok(())
//! }
//! ```

mod command;
mod display;
mod error;
mod mixer;
mod streams;

pub use {
    display::format_volume,
    error::MixerError,
    error::Result as CoreResult,
    mixer::{
        Mixer, PulseMixer, SinkFilter, SinkId, VolumeDelta, VolumePercent, adjust_sinks,
        current_volume,
    },
    streams::{PactlStreams, StreamLister},
};

#[cfg(test)]
mod tests;
