use crate::{
    foundation::core::FrameIndex,
    timeline::resolve::{ResolvedSegment, Timeline},
};

/// One entry of an active chain: a live segment and the frame inside it.
#[derive(Clone, Copy, Debug)]
pub struct ActiveSegment<'a> {
    /// The segment whose interval contains the current frame.
    pub segment: &'a ResolvedSegment,
    /// `frame - segment.range.start`; in `[0, duration_frames)`.
    pub local_frame: i64,
}

impl ActiveSegment<'_> {
    /// Fraction of the segment already played, in `[0, 1)`.
    ///
    /// Exactly 0 on the segment's first frame; never reaches 1 because the
    /// interval is half-open.
    pub fn progress(&self) -> f64 {
        self.local_frame as f64 / self.segment.duration_frames as f64
    }
}

/// An outer-to-inner chain of active segments, from a top-level segment down
/// to one of its innermost active descendants.
pub type ActivePath<'a> = Vec<ActiveSegment<'a>>;

/// Every active chain at `frame`, in declaration order.
///
/// Overlapping siblings (at any depth) are all reported; declaration order is
/// the caller's default back-to-front stacking, actual compositing is the
/// rendering layer's policy. A frame outside every segment (a gap, or out of
/// `[0, total)`) yields an empty vec; that is a valid state, not an error.
///
/// Selection descends only through live segments: a child may spill outside
/// its parent's interval, but the spill is never reported while the parent
/// itself is inactive.
pub fn active_at<'a>(timeline: &'a Timeline, frame: FrameIndex) -> Vec<ActivePath<'a>> {
    let mut paths = Vec::new();
    collect_active(&timeline.roots, frame, &mut Vec::new(), &mut paths);
    paths
}

fn collect_active<'a>(
    segments: &'a [ResolvedSegment],
    frame: FrameIndex,
    chain: &mut Vec<ActiveSegment<'a>>,
    paths: &mut Vec<ActivePath<'a>>,
) {
    for segment in segments {
        if !segment.range.contains(frame) {
            continue;
        }
        chain.push(ActiveSegment {
            segment,
            local_frame: frame.0 - segment.range.start.0,
        });

        // A chain ends where no child is active; each active child branch
        // extends its own copy of the prefix.
        let before = paths.len();
        collect_active(&segment.children, frame, chain, paths);
        if paths.len() == before {
            paths.push(chain.clone());
        }

        chain.pop();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/active.rs"]
mod tests;
