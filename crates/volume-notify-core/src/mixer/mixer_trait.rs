use crate::{
    CoreResult,
    mixer::{SinkFilter, SinkId, VolumeDelta, VolumePercent},
};

/// Audio backend capable of enumerating sinks and changing their volume.
///
/// [`PulseMixer`](crate::PulseMixer) shells out to `pulsemixer`; anything
/// else (a native audio API, a test double) can stand in without touching
/// the callers.
pub trait Mixer {
    /// List sink ids in the order the backend reports them.
    fn list_sinks(&self, filter: SinkFilter) -> CoreResult<Vec<SinkId>>;

    /// Apply a signed percentage change to one sink.
    fn change_volume(&self, sink: SinkId, delta: VolumeDelta) -> CoreResult<()>;

    /// Read the current volume of one sink.
    fn get_volume(&self, sink: SinkId) -> CoreResult<VolumePercent>;

    /// List sinks currently marked as default.
    fn list_default_sinks(&self) -> CoreResult<Vec<SinkId>> {
        self.list_sinks(SinkFilter::DefaultOnly)
    }
}
