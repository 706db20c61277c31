use crate::{
    foundation::core::{Fps, FrameIndex, FrameRange},
    foundation::error::CuelineResult,
    timeline::segment::Segment,
    timeline::transition::ExitTransition,
};

/// A [`Segment`] annotated with its absolute `[start, end)` frame interval.
///
/// Invariant: `range.end == range.start + duration_frames`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ResolvedSegment {
    /// Absolute, root-relative placement on the frame axis.
    pub range: FrameRange,
    /// Duration carried over from the source segment.
    pub duration_frames: i64,
    /// Offset carried over from the source segment.
    pub offset_frames: i64,
    /// Display label carried over from the source segment.
    pub label: Option<String>,
    /// Exit policy carried over from the source segment.
    pub exit: Option<ExitTransition>,
    /// Index path from the root; the segment's identity.
    pub path: Vec<usize>,
    /// Resolved nested sub-timeline, in absolute coordinates.
    pub children: Vec<ResolvedSegment>,
}

/// Non-fatal diagnostics produced while resolving.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ResolveWarning {
    /// A segment starts before its container (frame 0 for top-level
    /// segments, the parent's start otherwise). Allowed, never clamped,
    /// but usually a template bug worth surfacing.
    StartsBeforeParent {
        /// Index path of the offending segment.
        path: Vec<usize>,
        /// Resolved start of the offending segment.
        start: FrameIndex,
        /// Start of its container.
        parent_start: FrameIndex,
    },
}

/// The resolved tree plus composition-level totals and diagnostics.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Frame rate the composition plays at.
    pub fps: Fps,
    /// Resolved top-level segments, in declaration order.
    pub roots: Vec<ResolvedSegment>,
    /// `max(range.end)` over top-level segments; 0 when empty. Not a sum,
    /// because siblings may overlap.
    pub total_duration_frames: i64,
    /// Diagnostics collected during resolution.
    pub warnings: Vec<ResolveWarning>,
}

/// Lay the segment tree out on the absolute frame axis.
///
/// Pure: the same tree and fps always produce the same timeline, so it can be
/// recomputed at will. Within each sibling list a cursor starts at the list's
/// local time 0 and each segment starts at `cursor + offset_frames`; the
/// cursor then advances to `max(cursor, end)`, so an overlapping sibling
/// never rewinds it. Children recurse with the parent's absolute start as
/// their local time 0.
///
/// # Errors
///
/// [`crate::CuelineError::InvalidSegment`] if any segment in the tree has a
/// non-positive duration; no partial timeline is produced.
#[tracing::instrument(skip(roots))]
pub fn resolve(roots: &[Segment], fps: Fps) -> CuelineResult<Timeline> {
    for root in roots {
        root.validate()?;
    }

    let mut warnings = Vec::new();
    let resolved = resolve_list(roots, 0, &mut Vec::new(), &mut warnings);
    let total_duration_frames = resolved.iter().map(|s| s.range.end.0).max().unwrap_or(0);

    Ok(Timeline {
        fps,
        roots: resolved,
        total_duration_frames,
        warnings,
    })
}

fn resolve_list(
    segments: &[Segment],
    base: i64,
    path: &mut Vec<usize>,
    warnings: &mut Vec<ResolveWarning>,
) -> Vec<ResolvedSegment> {
    let mut cursor = base;
    let mut out = Vec::with_capacity(segments.len());

    for (index, segment) in segments.iter().enumerate() {
        let start = cursor + segment.offset_frames;
        let end = start + segment.duration_frames;
        path.push(index);

        if start < base {
            tracing::warn!(
                path = ?path,
                start,
                parent_start = base,
                "segment starts before its container"
            );
            warnings.push(ResolveWarning::StartsBeforeParent {
                path: path.clone(),
                start: FrameIndex(start),
                parent_start: FrameIndex(base),
            });
        }

        let children = resolve_list(&segment.children, start, path, warnings);
        out.push(ResolvedSegment {
            range: FrameRange {
                start: FrameIndex(start),
                end: FrameIndex(end),
            },
            duration_frames: segment.duration_frames,
            offset_frames: segment.offset_frames,
            label: segment.label.clone(),
            exit: segment.exit,
            path: path.clone(),
            children,
        });
        path.pop();

        cursor = cursor.max(end);
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/resolve.rs"]
mod tests;
