use crate::foundation::error::{CuelineError, CuelineResult};

/// A position on the absolute frame axis of a composition.
///
/// Signed: segment offsets are never clamped, so a resolved start can sit
/// before frame 0 (see [`crate::ResolveWarning`]).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub i64);

/// A half-open `[start, end)` interval on the frame axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame inside the interval.
    pub start: FrameIndex,
    /// First frame past the interval (exclusive).
    pub end: FrameIndex,
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> CuelineResult<Self> {
        if start.0 > end.0 {
            return Err(CuelineError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames covered by the interval.
    pub fn len_frames(self) -> i64 {
        self.end.0 - self.start.0
    }

    /// Whether the interval covers no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Whether `f` falls inside `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Translate the whole interval by `delta` frames (either direction).
    pub fn shift(self, delta: i64) -> Self {
        Self {
            start: FrameIndex(self.start.0 + delta),
            end: FrameIndex(self.end.0 + delta),
        }
    }
}

/// Frame rate as an exact rational (e.g. 30000/1001 for NTSC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator, frames.
    pub num: u32,
    /// Denominator, seconds; must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build an fps value, rejecting zero numerator or denominator.
    pub fn new(num: u32, den: u32) -> CuelineResult<Self> {
        if den == 0 {
            return Err(CuelineError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(CuelineError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frame rate as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Seconds covered by a single frame.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert a duration in seconds to whole frames, rounding to nearest.
    pub fn secs_to_frames(self, secs: f64) -> i64 {
        (secs * self.as_f64()).round() as i64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
