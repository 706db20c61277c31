use super::*;
use crate::foundation::error::CuelineError;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn spans(timeline: &Timeline) -> Vec<(i64, i64)> {
    timeline
        .roots
        .iter()
        .map(|s| (s.range.start.0, s.range.end.0))
        .collect()
}

#[test]
fn sequential_siblings_butt_join() {
    let t = resolve(&[Segment::new(45), Segment::new(45)], fps30()).unwrap();
    assert_eq!(spans(&t), vec![(0, 45), (45, 90)]);
    assert_eq!(t.total_duration_frames, 90);
}

#[test]
fn negative_offset_overlaps_previous_sibling() {
    let t = resolve(&[Segment::new(45), Segment::new(45).offset(-20)], fps30()).unwrap();
    assert_eq!(spans(&t), vec![(0, 45), (25, 70)]);
    assert_eq!(t.total_duration_frames, 70);
}

#[test]
fn positive_offset_leaves_a_gap() {
    let t = resolve(&[Segment::new(10), Segment::new(10).offset(5)], fps30()).unwrap();
    assert_eq!(spans(&t), vec![(0, 10), (15, 25)]);
}

#[test]
fn first_sibling_offset_applies_from_local_zero() {
    let t = resolve(&[Segment::new(10).offset(7)], fps30()).unwrap();
    assert_eq!(spans(&t), vec![(7, 17)]);
    assert_eq!(t.total_duration_frames, 17);
}

#[test]
fn cursor_is_never_rewound_by_overlap() {
    // The short middle segment ends inside the first one; the third still
    // seeds from the furthest end seen so far (50), not from 20.
    let t = resolve(
        &[
            Segment::new(50),
            Segment::new(10).offset(-40),
            Segment::new(10).offset(-5),
        ],
        fps30(),
    )
    .unwrap();
    assert_eq!(spans(&t), vec![(0, 50), (10, 20), (45, 55)]);
    assert_eq!(t.total_duration_frames, 55);
}

#[test]
fn children_are_resolved_relative_to_parent_start() {
    let t = resolve(
        &[
            Segment::new(30),
            Segment::new(60)
                .offset(-10)
                .children(vec![Segment::new(15), Segment::new(15).offset(-5)]),
        ],
        fps30(),
    )
    .unwrap();
    let parent = &t.roots[1];
    assert_eq!((parent.range.start.0, parent.range.end.0), (20, 80));
    let kids: Vec<_> = parent
        .children
        .iter()
        .map(|s| (s.range.start.0, s.range.end.0))
        .collect();
    assert_eq!(kids, vec![(20, 35), (30, 45)]);
}

#[test]
fn end_equals_start_plus_duration_everywhere() {
    fn check(segments: &[ResolvedSegment]) {
        for s in segments {
            assert_eq!(s.range.end.0, s.range.start.0 + s.duration_frames);
            check(&s.children);
        }
    }
    let t = resolve(
        &[
            Segment::new(45),
            Segment::new(45)
                .offset(-20)
                .children(vec![Segment::new(90).offset(-3)]),
        ],
        fps30(),
    )
    .unwrap();
    check(&t.roots);
}

#[test]
fn paths_are_positional_identity() {
    let t = resolve(
        &[
            Segment::new(10),
            Segment::new(10).children(vec![Segment::new(5), Segment::new(5)]),
        ],
        fps30(),
    )
    .unwrap();
    assert_eq!(t.roots[0].path, vec![0]);
    assert_eq!(t.roots[1].path, vec![1]);
    assert_eq!(t.roots[1].children[0].path, vec![1, 0]);
    assert_eq!(t.roots[1].children[1].path, vec![1, 1]);
}

#[test]
fn resolve_is_deterministic() {
    let tree = vec![
        Segment::new(45),
        Segment::new(45)
            .offset(-20)
            .children(vec![Segment::new(30).offset(-10)]),
        Segment::new(90).offset(-20),
    ];
    let a = resolve(&tree, fps30()).unwrap();
    let b = resolve(&tree, fps30()).unwrap();
    assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
}

#[test]
fn nonpositive_duration_aborts_resolve() {
    let err = resolve(
        &[Segment::new(10), Segment::new(10).children(vec![Segment::new(0)])],
        fps30(),
    )
    .unwrap_err();
    assert!(matches!(err, CuelineError::InvalidSegment(_)));
}

#[test]
fn empty_tree_resolves_to_zero_duration() {
    let t = resolve(&[], fps30()).unwrap();
    assert!(t.roots.is_empty());
    assert_eq!(t.total_duration_frames, 0);
    assert!(t.warnings.is_empty());
}

#[test]
fn start_before_container_warns_without_clamping() {
    let t = resolve(
        &[Segment::new(30).children(vec![Segment::new(10).offset(-20)])],
        fps30(),
    )
    .unwrap();
    // Unclamped: the child really does start at -20 relative to the root.
    assert_eq!(t.roots[0].children[0].range.start, FrameIndex(-20));
    assert_eq!(
        t.warnings,
        vec![ResolveWarning::StartsBeforeParent {
            path: vec![0, 0],
            start: FrameIndex(-20),
            parent_start: FrameIndex(0),
        }]
    );
}

#[test]
fn root_before_frame_zero_warns_against_zero() {
    let t = resolve(&[Segment::new(10).offset(-4)], fps30()).unwrap();
    assert_eq!(
        t.warnings,
        vec![ResolveWarning::StartsBeforeParent {
            path: vec![0],
            start: FrameIndex(-4),
            parent_start: FrameIndex(0),
        }]
    );
}
