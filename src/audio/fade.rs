use crate::{
    animation::interp::{InterpOptions, interpolate},
    foundation::core::FrameIndex,
    foundation::error::{CuelineError, CuelineResult},
};

/// Bias of the fade curve toward the tail of the window.
const FADE_BIAS: f64 = 1.5;

/// Background-track volume at `frame`, in `[0, 1]`.
///
/// Full volume (`1.0`) up to and including `total - window`, then
/// `1 - f^1.5` where `f` ramps linearly from 0 to 1 across the window.
/// Monotonically non-increasing over the window, exactly `0.0` at
/// `frame == total`; later frames clamp to `0.0`. Stateless and independent
/// of which segment is showing.
///
/// # Errors
///
/// [`CuelineError::Validation`] if the fade window is non-positive or longer
/// than the composition.
pub fn fade_volume(
    frame: FrameIndex,
    total_duration_frames: i64,
    fade_window_frames: i64,
) -> CuelineResult<f64> {
    if fade_window_frames <= 0 {
        return Err(CuelineError::validation(
            "fade window must be at least 1 frame",
        ));
    }
    if fade_window_frames > total_duration_frames {
        return Err(CuelineError::validation(
            "fade window must not exceed the composition duration",
        ));
    }

    let fade_start = total_duration_frames - fade_window_frames;
    if frame.0 <= fade_start {
        return Ok(1.0);
    }

    let faded = interpolate(
        frame.0 as f64,
        &[fade_start as f64, total_duration_frames as f64],
        &[0.0, 1.0],
        InterpOptions::default(),
    )?;
    Ok(1.0 - faded.powf(FADE_BIAS))
}

/// Background-track placement for a composition.
///
/// `start_from_frames` is where the host should start reading the source
/// audio; the core never touches samples, it only hands the mixer a volume
/// per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AudioCue {
    /// Source-side read offset, in frames.
    pub start_from_frames: i64,
    /// Length of the tail fade-out window, in frames.
    pub fade_window_frames: i64,
}

impl AudioCue {
    /// Volume for this cue at `frame` of a `total_duration_frames`-long
    /// composition; see [`fade_volume`].
    pub fn volume_at(&self, frame: FrameIndex, total_duration_frames: i64) -> CuelineResult<f64> {
        fade_volume(frame, total_duration_frames, self.fade_window_frames)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/fade.rs"]
mod tests;
