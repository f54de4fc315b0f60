use crate::{
    CoreResult, MixerError,
    mixer::{Mixer, VolumeDelta, VolumePercent},
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{info, instrument, warn};

/// Apply `delta` to every default sink.
///
/// Every sink is attempted even if an earlier one fails; failures are
/// collected into [`MixerError::AdjustFailed`]. No default sinks is a no-op.
#[track_caller]
#[instrument(skip(mixer))]
pub fn adjust_sinks<M: Mixer + ?Sized>(mixer: &M, delta: VolumeDelta) -> CoreResult<()> {
    let sinks = mixer.list_default_sinks()?;

    if sinks.is_empty() {
        warn!("No default sinks to adjust");
        return Ok(());
    }

    let mut failed = Vec::new();
    for sink in sinks {
        match mixer.change_volume(sink, delta) {
            Ok(()) => info!(%sink, %delta, "Volume changed"),
            Err(e) => {
                warn!(%sink, error = %e, "Failed to change volume");
                failed.push(sink);
            }
        }
    }

    if !failed.is_empty() {
        return Err(MixerError::AdjustFailed {
            failed,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

/// Read the volume of the first default sink.
///
/// Enumerates afresh rather than reusing an earlier listing.
#[track_caller]
#[instrument(skip(mixer))]
pub fn current_volume<M: Mixer + ?Sized>(mixer: &M) -> CoreResult<VolumePercent> {
    let sink = mixer
        .list_default_sinks()?
        .first()
        .copied()
        .ok_or_else(|| MixerError::NoSinkFound {
            location: ErrorLocation::from(Location::caller()),
        })?;

    let volume = mixer.get_volume(sink)?;

    info!(%sink, volume = volume.0, "Current volume");

    Ok(volume)
}
