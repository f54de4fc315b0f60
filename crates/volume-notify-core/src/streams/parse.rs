use std::collections::HashSet;

/// Header of each playback stream block in `pactl list sink-inputs`.
pub(crate) const SINK_INPUT_PREFIX: &str = "Sink Input #";
/// Header of each recording stream block in `pactl list source-outputs`.
pub(crate) const SOURCE_OUTPUT_PREFIX: &str = "Source Output #";

/// Collect the numeric ids following `prefix` at the start of a line.
///
/// Duplicates are dropped, first appearance wins. Headers without a
/// numeric id are skipped.
pub(crate) fn parse_stream_ids(output: &str, prefix: &str) -> Vec<u32> {
    let mut seen = HashSet::new();

    output
        .lines()
        .filter_map(|line| line.strip_prefix(prefix))
        .filter_map(|rest| rest.trim().parse::<u32>().ok())
        .filter(|id| seen.insert(*id))
        .collect()
}
