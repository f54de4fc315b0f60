use crate::{
    CoreResult, Mixer, MixerError, SinkFilter, SinkId, VolumeDelta, VolumePercent, adjust_sinks,
    current_volume,
};

use std::{cell::RefCell, panic::Location};

use error_location::ErrorLocation;

/// In-memory mixer recording every call it receives.
struct FakeMixer {
    default_sinks: Vec<SinkId>,
    failing_sink: Option<SinkId>,
    volume: u32,
    calls: RefCell<Vec<String>>,
}

impl FakeMixer {
    fn with_sinks(default_sinks: Vec<SinkId>) -> Self {
        Self {
            default_sinks,
            failing_sink: None,
            volume: 40,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Mixer for FakeMixer {
    fn list_sinks(&self, filter: SinkFilter) -> CoreResult<Vec<SinkId>> {
        self.calls.borrow_mut().push(format!("list {filter:?}"));
        Ok(self.default_sinks.clone())
    }

    fn change_volume(&self, sink: SinkId, delta: VolumeDelta) -> CoreResult<()> {
        self.calls.borrow_mut().push(format!("change {sink} {delta}"));

        if self.failing_sink == Some(sink) {
            return Err(MixerError::CommandFailed {
                program: "fake".to_string(),
                status: "exit status: 1".to_string(),
                stderr: String::new(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    fn get_volume(&self, sink: SinkId) -> CoreResult<VolumePercent> {
        self.calls.borrow_mut().push(format!("get {sink}"));
        Ok(VolumePercent(self.volume))
    }
}

/// WHAT: Every default sink receives the same delta
/// WHY: All active outputs must move together
#[test]
#[allow(clippy::unwrap_used)]
fn given_two_default_sinks_when_raising_then_both_changed() {
    // Given: Two default sinks
    let mixer = FakeMixer::with_sinks(vec![SinkId(1), SinkId(5)]);

    // When: Raising by 10
    adjust_sinks(&mixer, VolumeDelta::raise(10)).unwrap();

    // Then: Enumeration happens once, then each sink is changed in order
    assert_eq!(
        mixer.calls(),
        vec!["list DefaultOnly", "change 1 +10", "change 5 +10"]
    );
}

/// WHAT: A failing sink does not stop the remaining sinks
/// WHY: One broken device should not freeze volume on the others
#[test]
fn given_first_sink_fails_when_lowering_then_second_still_attempted() {
    // Given: Two sinks, the first of which rejects changes
    let mut mixer = FakeMixer::with_sinks(vec![SinkId(1), SinkId(5)]);
    mixer.failing_sink = Some(SinkId(1));

    // When: Lowering by 10
    let result = adjust_sinks(&mixer, VolumeDelta::lower(10));

    // Then: Both were attempted and only the failing one is reported
    assert_eq!(
        mixer.calls(),
        vec!["list DefaultOnly", "change 1 -10", "change 5 -10"]
    );
    assert!(matches!(
        result,
        Err(MixerError::AdjustFailed { ref failed, .. }) if failed == &vec![SinkId(1)]
    ));
}

/// WHAT: No default sinks is a no-op
/// WHY: Nothing to adjust is not a failure of the adjustment
#[test]
fn given_no_sinks_when_adjusting_then_ok_without_changes() {
    let mixer = FakeMixer::with_sinks(Vec::new());

    let result = adjust_sinks(&mixer, VolumeDelta::raise(10));

    assert!(result.is_ok());
    assert_eq!(mixer.calls(), vec!["list DefaultOnly"]);
}

/// WHAT: The volume is read from the first default sink
/// WHY: The notification reflects the primary output
#[test]
#[allow(clippy::unwrap_used)]
fn given_two_sinks_when_reading_volume_then_first_sink_queried() {
    let mixer = FakeMixer::with_sinks(vec![SinkId(4), SinkId(9)]);

    let volume = current_volume(&mixer).unwrap();

    assert_eq!(volume, VolumePercent(40));
    assert_eq!(mixer.calls(), vec!["list DefaultOnly", "get 4"]);
}

/// WHAT: Reading volume with no sinks is an explicit error
/// WHY: Indexing an empty list must not panic
#[test]
fn given_no_sinks_when_reading_volume_then_no_sink_found() {
    let mixer = FakeMixer::with_sinks(Vec::new());

    let result = current_volume(&mixer);

    assert!(matches!(result, Err(MixerError::NoSinkFound { .. })));
}
