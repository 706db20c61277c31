use super::*;
use crate::{
    foundation::core::Fps,
    timeline::resolve::resolve,
    timeline::segment::Segment,
};

fn resolved_with_exit(duration: i64, exit: Option<ExitTransition>) -> ResolvedSegment {
    let mut seg = Segment::new(duration);
    seg.exit = exit;
    resolve(std::slice::from_ref(&seg), Fps::new(30, 1).unwrap())
        .unwrap()
        .roots
        .remove(0)
}

fn linear_exit(duration_frames: i64) -> ExitTransition {
    ExitTransition {
        kind: ExitKind::SlideToTop,
        duration_frames,
        ease: Ease::Linear,
    }
}

#[test]
fn no_policy_means_no_progress() {
    let seg = resolved_with_exit(30, None);
    assert_eq!(exit_progress(&seg, FrameIndex(29)), None);
}

#[test]
fn progress_only_inside_the_tail_window() {
    // Window is [25, 30) for a 30-frame segment with a 5-frame exit.
    let seg = resolved_with_exit(30, Some(linear_exit(5)));
    assert_eq!(exit_progress(&seg, FrameIndex(24)), None);
    assert_eq!(exit_progress(&seg, FrameIndex(25)), Some(0.0));
    assert_eq!(exit_progress(&seg, FrameIndex(29)), Some(1.0));
    assert_eq!(exit_progress(&seg, FrameIndex(30)), None);
}

#[test]
fn midpoint_is_linear() {
    let seg = resolved_with_exit(30, Some(linear_exit(5)));
    assert_eq!(exit_progress(&seg, FrameIndex(27)), Some(0.5));
}

#[test]
fn window_clamps_to_segment_length() {
    let seg = resolved_with_exit(4, Some(linear_exit(100)));
    assert_eq!(exit_progress(&seg, FrameIndex(0)), Some(0.0));
    assert_eq!(exit_progress(&seg, FrameIndex(3)), Some(1.0));
}

#[test]
fn single_frame_window_jumps_to_full_progress() {
    let seg = resolved_with_exit(30, Some(linear_exit(1)));
    assert_eq!(exit_progress(&seg, FrameIndex(28)), None);
    assert_eq!(exit_progress(&seg, FrameIndex(29)), Some(1.0));
}

#[test]
fn nonpositive_duration_is_inert() {
    let seg = resolved_with_exit(30, Some(linear_exit(0)));
    assert_eq!(exit_progress(&seg, FrameIndex(29)), None);
}

#[test]
fn eased_progress_respects_the_curve() {
    let seg = resolved_with_exit(
        30,
        Some(ExitTransition {
            kind: ExitKind::FadeOut,
            duration_frames: 5,
            ease: Ease::InQuad,
        }),
    );
    assert_eq!(exit_progress(&seg, FrameIndex(27)), Some(0.25));
}
