use crate::{
    animation::ease::Ease, foundation::core::FrameIndex, timeline::resolve::ResolvedSegment,
};

/// How a segment leaves the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ExitKind {
    /// Slide the content off the top edge.
    SlideToTop,
    /// Fade the content to transparent.
    FadeOut,
}

/// Per-segment exit policy.
///
/// Attached directly to the [`crate::Segment`] that leaves, so behavior never
/// depends on the segment's position in its sibling list.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExitTransition {
    /// Visual style of the exit.
    pub kind: ExitKind,
    /// Length of the exit window, clamped to the segment length.
    pub duration_frames: i64,
    /// Curve applied to the linear window fraction.
    pub ease: Ease,
}

/// Eased exit progress for `segment` at `frame`.
///
/// `Some(p)` with `p` in `[0, 1]` only inside the window ending at the
/// segment's last frame; `None` elsewhere, without a policy, or for an inert
/// (non-positive duration) policy.
pub fn exit_progress(segment: &ResolvedSegment, frame: FrameIndex) -> Option<f64> {
    let policy = segment.exit.as_ref()?;
    if policy.duration_frames <= 0 {
        return None;
    }

    let dur = policy.duration_frames.min(segment.range.len_frames());
    let window_start = segment.range.end.0 - dur;
    if !(window_start <= frame.0 && frame.0 < segment.range.end.0) {
        return None;
    }

    // dur == 1 collapses the window to a single full-progress frame.
    let denom = dur - 1;
    let t = if denom == 0 {
        1.0
    } else {
        ((frame.0 - window_start) as f64) / (denom as f64)
    };
    Some(policy.ease.apply(t).clamp(0.0, 1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/transition.rs"]
mod tests;
