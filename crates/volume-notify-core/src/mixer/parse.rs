//! Parsers for `pulsemixer` text output.

use crate::{
    CoreResult, MixerError,
    mixer::{SinkFilter, SinkId, VolumePercent},
};

use std::panic::Location;

use error_location::ErrorLocation;

const SINK_LINE_PREFIX: &str = "Sink:";
const DEFAULT_MARKER: &str = "Default";
const SINK_ID_PATTERN: &str = "ID: sink-";

/// Extract sink ids from `--list-sinks` output.
///
/// Selects lines starting with `Sink:` (and containing `Default` for
/// [`SinkFilter::DefaultOnly`]) and reads the digits following `ID: sink-`.
/// Order and duplicates are kept as the tool printed them.
#[track_caller]
pub(crate) fn parse_sink_list(output: &str, filter: SinkFilter) -> CoreResult<Vec<SinkId>> {
    output
        .lines()
        .filter(|line| line.starts_with(SINK_LINE_PREFIX))
        .filter(|line| filter == SinkFilter::All || line.contains(DEFAULT_MARKER))
        .map(|line| {
            sink_id_in(line).ok_or_else(|| MixerError::UnexpectedOutput {
                reason: format!("no sink id in line {line:?}"),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .collect()
}

/// First `ID: sink-` occurrence that is followed by digits.
fn sink_id_in(line: &str) -> Option<SinkId> {
    line.match_indices(SINK_ID_PATTERN).find_map(|(start, pattern)| {
        let rest = &line[start + pattern.len()..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());

        rest[..end].parse().ok().map(SinkId)
    })
}

/// Parse `--get-volume` output: the first whitespace-delimited token is
/// the volume percentage (pulsemixer prints one value per channel).
#[track_caller]
pub(crate) fn parse_volume(output: &str) -> CoreResult<VolumePercent> {
    let token = output.split_whitespace().next().unwrap_or_default();

    token
        .parse()
        .map(VolumePercent)
        .map_err(|_| MixerError::InvalidVolume {
            token: token.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}
