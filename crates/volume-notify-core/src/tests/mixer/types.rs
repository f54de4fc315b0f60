use crate::{SinkFilter, VolumeDelta};

/// WHAT: Deltas render with an explicit sign
/// WHY: pulsemixer treats an unsigned value as an absolute volume
#[test]
fn given_raise_and_lower_when_displaying_then_signed() {
    assert_eq!(VolumeDelta::raise(10).to_string(), "+10");
    assert_eq!(VolumeDelta::lower(10).to_string(), "-10");
}

/// WHAT: Zero step renders as +0
/// WHY: Keeps the argument in the relative form the mixer expects
#[test]
fn given_zero_step_when_raising_then_plus_zero() {
    assert_eq!(VolumeDelta::raise(0).to_string(), "+0");
}

/// WHAT: The default filter only selects default sinks
/// WHY: Volume keys must never touch non-default outputs
#[test]
fn given_default_filter_when_constructed_then_default_only() {
    assert_eq!(SinkFilter::default(), SinkFilter::DefaultOnly);
}
