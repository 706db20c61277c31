//! The release-highlights template: the canonical segment tree of a
//! release-notes video, built from opaque payload parameters.
//!
//! Payload strings (repository slug, release tag, change titles) only ever
//! become segment labels; layout depends on the frame rate and on how many
//! top changes there are, never on the text itself.

use crate::{
    animation::ease::Ease,
    audio::fade::AudioCue,
    foundation::core::Fps,
    foundation::error::CuelineResult,
    timeline::resolve::{Timeline, resolve},
    timeline::segment::Segment,
    timeline::transition::{ExitKind, ExitTransition},
};

/// Standard card-to-card overlap, in frames.
const CARD_OVERLAP: i64 = -20;
/// Wider overlap used around the full-list scroll and the outro.
const WIDE_OVERLAP: i64 = -30;
/// Exit transitions run over this many frames.
const EXIT_FRAMES: i64 = 20;

/// One highlighted change: a title card with supporting copy.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChangeSummary {
    /// Headline for the change.
    pub title: String,
    /// Longer supporting description.
    pub description: String,
}

/// Template parameters for one release-highlights composition.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReleaseHighlights {
    /// e.g. "vercel/next.js".
    pub repository_slug: String,
    /// e.g. "v13.4.2".
    pub release_tag: String,
    /// Changes that get a dedicated card each.
    pub top_changes: Vec<ChangeSummary>,
    /// Full change list for the scrolling segment.
    pub all_changes: Vec<String>,
}

impl ReleaseHighlights {
    /// The composition's segment tree at `fps`, ready for [`resolve`].
    pub fn segments(&self, fps: Fps) -> Vec<Segment> {
        let mut segments = vec![
            Segment::new(fps.secs_to_frames(1.5)).label(&self.repository_slug),
            Segment::new(fps.secs_to_frames(1.5))
                .offset(CARD_OVERLAP)
                .label(&self.release_tag),
            Segment::new(fps.secs_to_frames(3.0))
                .offset(CARD_OVERLAP)
                .label(self.slug_and_tag()),
            Segment::new(fps.secs_to_frames(3.0))
                .offset(CARD_OVERLAP)
                .label("Here are the top changes!"),
        ];

        for (i, change) in self.top_changes.iter().enumerate() {
            let mut card = Segment::new(fps.secs_to_frames(4.0))
                .offset(CARD_OVERLAP)
                .label(format!("Top changes - {}", i + 1))
                .children(vec![
                    Segment::new(fps.secs_to_frames(4.0)).label((i + 1).to_string()),
                    // Title copy slides in over the badge's last three seconds.
                    Segment::new(fps.secs_to_frames(3.0))
                        .offset(-fps.secs_to_frames(3.0))
                        .label(&change.title),
                ]);
            if i + 1 == self.top_changes.len() {
                card = card.exit(ExitTransition {
                    kind: ExitKind::SlideToTop,
                    duration_frames: EXIT_FRAMES,
                    ease: Ease::OutCubic,
                });
            }
            segments.push(card);
        }

        segments.push(
            Segment::new(fps.secs_to_frames(5.0))
                .offset(WIDE_OVERLAP)
                .label("Scrolling all things changed list"),
        );
        segments.push(
            Segment::new(fps.secs_to_frames(3.0))
                .offset(WIDE_OVERLAP)
                .label("Checkout the latest release")
                .children(vec![
                    // Lead-in card deliberately starts before its parent so
                    // the doors are already closing when the outro cuts in.
                    Segment::new(fps.secs_to_frames(1.5)).offset(CARD_OVERLAP),
                ]),
        );
        segments.push(
            Segment::new(fps.secs_to_frames(3.0))
                .offset(CARD_OVERLAP)
                .label(self.slug_and_tag())
                .exit(ExitTransition {
                    kind: ExitKind::FadeOut,
                    duration_frames: EXIT_FRAMES,
                    ease: Ease::Linear,
                }),
        );

        segments
    }

    /// Build and resolve the whole composition in one step.
    pub fn timeline(&self, fps: Fps) -> CuelineResult<Timeline> {
        resolve(&self.segments(fps), fps)
    }

    /// Background-track placement: skip the source intro, fade over the last
    /// five seconds.
    pub fn audio_cue(&self, fps: Fps) -> AudioCue {
        AudioCue {
            start_from_frames: fps.secs_to_frames(20.0),
            fade_window_frames: fps.secs_to_frames(5.0),
        }
    }

    fn slug_and_tag(&self) -> String {
        format!("{} | {}", self.repository_slug, self.release_tag)
    }
}

#[cfg(test)]
#[path = "../tests/unit/template.rs"]
mod tests;
