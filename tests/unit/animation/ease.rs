use super::*;

const ALL: [Ease; 7] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_exact() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?} at 0");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?} at 1");
    }
}

#[test]
fn input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-0.5), 0.0);
        assert_eq!(ease.apply(1.5), 1.0);
    }
}

#[test]
fn curves_are_monotonic() {
    for ease in ALL {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease.apply(f64::from(i) / 100.0);
            assert!(v >= prev, "{ease:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn quad_midpoints() {
    assert_eq!(Ease::InQuad.apply(0.5), 0.25);
    assert_eq!(Ease::OutQuad.apply(0.5), 0.75);
    assert_eq!(Ease::InOutQuad.apply(0.5), 0.5);
}
