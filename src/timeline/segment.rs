use crate::{
    foundation::error::{CuelineError, CuelineResult},
    timeline::transition::ExitTransition,
};

/// One timed unit in the composition tree.
///
/// A segment occupies `duration_frames` once active and starts
/// `offset_frames` after the end of its previous sibling (0 = back-to-back,
/// negative = overlap, positive = gap). Children form a nested sub-timeline
/// laid out relative to this segment's local time 0; they are not constrained
/// to fit inside the parent, clipping is the rendering layer's policy.
///
/// Identity is positional (the index path from the root); `label` is display
/// metadata and never affects layout.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    /// Frames this segment occupies once active; must be > 0.
    pub duration_frames: i64,
    /// Signed start shift relative to the previous sibling's end.
    #[serde(default)]
    pub offset_frames: i64,
    /// Display label; opaque payload, never inspected for layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Optional policy for leaving the segment (slide away, fade out).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit: Option<ExitTransition>,
    /// Nested sub-timeline in this segment's local time.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Segment>,
}

impl Segment {
    /// A segment of `duration_frames` that starts when its predecessor ends.
    pub fn new(duration_frames: i64) -> Self {
        Self {
            duration_frames,
            offset_frames: 0,
            label: None,
            exit: None,
            children: Vec::new(),
        }
    }

    /// Set the start shift relative to the previous sibling's end.
    pub fn offset(mut self, offset_frames: i64) -> Self {
        self.offset_frames = offset_frames;
        self
    }

    /// Attach a display label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attach an exit-transition policy.
    pub fn exit(mut self, exit: ExitTransition) -> Self {
        self.exit = Some(exit);
        self
    }

    /// Attach a nested sub-timeline.
    pub fn children(mut self, children: Vec<Segment>) -> Self {
        self.children = children;
        self
    }

    /// Reject non-positive durations anywhere in the subtree.
    pub fn validate(&self) -> CuelineResult<()> {
        if self.duration_frames <= 0 {
            return Err(CuelineError::invalid_segment(format!(
                "duration_frames must be > 0 (got {}{})",
                self.duration_frames,
                match &self.label {
                    Some(l) => format!(" in segment '{l}'"),
                    None => String::new(),
                }
            )));
        }
        for child in &self.children {
            child.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/segment.rs"]
mod tests;
