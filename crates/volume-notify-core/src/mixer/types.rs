use std::fmt;

/// Numeric identifier of an output device as reported by the mixer.
///
/// Discovered fresh on every call, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SinkId(pub u32);

impl fmt::Display for SinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Signed change in volume, in percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeDelta(pub i32);

impl VolumeDelta {
    /// Delta that raises volume by `step` points.
    pub fn raise(step: u32) -> Self {
        Self(i32::try_from(step).unwrap_or(i32::MAX))
    }

    /// Delta that lowers volume by `step` points.
    pub fn lower(step: u32) -> Self {
        Self(-i32::try_from(step).unwrap_or(i32::MAX))
    }
}

/// Renders with an explicit sign (`+10`, `-10`), as the mixer expects.
impl fmt::Display for VolumeDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

/// Volume level read back from the mixer. Nominally 0-100, not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VolumePercent(pub u32);

impl fmt::Display for VolumePercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Which sinks an enumeration returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkFilter {
    /// Every sink the mixer lists.
    All,
    /// Only sinks marked as default.
    #[default]
    DefaultOnly,
}
