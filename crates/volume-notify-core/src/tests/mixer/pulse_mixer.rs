use crate::{Mixer, MixerError, PulseMixer, SinkFilter, SinkId, VolumeDelta};

/// WHAT: A missing mixer binary is reported as CommandNotFound
/// WHY: The most common misconfiguration needs a clear message
#[test]
fn given_missing_program_when_listing_sinks_then_command_not_found() {
    // Given: An adapter pointing at a program that does not exist
    let mixer = PulseMixer::new("volume-notify-no-such-mixer");

    // When: Listing sinks
    let result = mixer.list_sinks(SinkFilter::DefaultOnly);

    // Then: The spawn failure is classified as not found
    assert!(matches!(
        result,
        Err(MixerError::CommandNotFound { ref program, .. }) if program == "volume-notify-no-such-mixer"
    ));
}

/// WHAT: A non-zero exit status is reported as CommandFailed
/// WHY: Failures must propagate instead of yielding empty output
#[test]
#[cfg(unix)]
fn given_failing_program_when_changing_volume_then_command_failed() {
    // Given: An adapter whose program always exits 1
    let mixer = PulseMixer::new("false");

    // When: Changing volume
    let result = mixer.change_volume(SinkId(0), VolumeDelta::raise(10));

    // Then: The exit status is surfaced
    assert!(matches!(result, Err(MixerError::CommandFailed { .. })));
}

/// WHAT: Successful but empty volume output is a parse error
/// WHY: Exit status alone does not make the reading valid
#[test]
#[cfg(unix)]
fn given_silent_program_when_getting_volume_then_invalid_volume() {
    // `true` exits 0 and prints nothing
    let mixer = PulseMixer::new("true");

    let result = mixer.get_volume(SinkId(0));

    assert!(matches!(result, Err(MixerError::InvalidVolume { .. })));
}
