//! Cueline is the timeline sequencing core of a templated highlight video.
//!
//! A composition is an ordered tree of timed [`Segment`]s. Each segment has a
//! duration, a signed start offset relative to the end of its previous sibling
//! (negative offsets overlap, enabling cross-fade style transitions), and an
//! ordered list of child segments laid out the same way in the parent's local
//! time. Cueline turns that tree into pixelable decisions without ever touching
//! pixels itself:
//!
//! 1. **Resolve**: `&[Segment] + Fps -> Timeline` (absolute `[start, end)`
//!    frame intervals for every node, computed once per composition)
//! 2. **Select**: `Timeline + FrameIndex -> Vec<ActivePath>` (which nested
//!    segments are live at a frame, with local time and progress)
//! 3. **Drive**: breakpoint interpolation and the audio fade curve, derived
//!    from the absolute frame position alone
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: resolution and selection are pure and
//!   stable for a given input; frames can be evaluated in any order.
//! - **No IO**: what to draw, fonts, colors and encoding belong to the host
//!   rendering layer. Cueline only reports "you are active, your local time
//!   is T, your progress is P".
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod audio;
mod foundation;
mod template;
mod timeline;

pub use animation::ease::Ease;
pub use animation::interp::{Extrapolate, InterpOptions, interpolate};
pub use audio::fade::{AudioCue, fade_volume};
pub use foundation::core::{Fps, FrameIndex, FrameRange};
pub use foundation::error::{CuelineError, CuelineResult};
pub use template::{ChangeSummary, ReleaseHighlights};
pub use timeline::active::{ActivePath, ActiveSegment, active_at};
pub use timeline::resolve::{ResolveWarning, ResolvedSegment, Timeline, resolve};
pub use timeline::segment::Segment;
pub use timeline::transition::{ExitKind, ExitTransition, exit_progress};
