use crate::VolumePercent;

const BAR_GLYPH: &str = "||";

/// Render a volume as `"<p>% "` followed by one `||` glyph per full ten percent.
///
/// `47` becomes `"47% ||||||||"` (four glyphs), `0` becomes `"0% "`.
pub fn format_volume(volume: VolumePercent) -> String {
    let bars = (volume.0 / 10) as usize;
    format!("{volume} {}", BAR_GLYPH.repeat(bars))
}
