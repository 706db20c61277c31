/// Easing curve applied by callers to a progress fraction in `[0, 1]`.
///
/// Easing is deliberately not part of [`crate::interpolate`]: it is a pure
/// post-processing step on the already-interpolated fraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity.
    Linear,
    /// Quadratic, slow start.
    InQuad,
    /// Quadratic, slow end.
    OutQuad,
    /// Quadratic, slow start and end.
    InOutQuad,
    /// Cubic, slow start.
    InCubic,
    /// Cubic, slow end.
    OutCubic,
    /// Cubic, slow start and end.
    InOutCubic,
}

impl Ease {
    /// Map `t` through the curve; input is clamped to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => power_in(t, 2),
            Self::OutQuad => power_out(t, 2),
            Self::InOutQuad => power_in_out(t, 2),
            Self::InCubic => power_in(t, 3),
            Self::OutCubic => power_out(t, 3),
            Self::InOutCubic => power_in_out(t, 3),
        }
    }
}

fn power_in(t: f64, power: i32) -> f64 {
    t.powi(power)
}

// Mirror of the in-curve around (0.5, 0.5).
fn power_out(t: f64, power: i32) -> f64 {
    1.0 - power_in(1.0 - t, power)
}

// In-curve up to the midpoint, its mirror after, each scaled to a half.
fn power_in_out(t: f64, power: i32) -> f64 {
    if t < 0.5 {
        power_in(2.0 * t, power) / 2.0
    } else {
        1.0 - power_in(2.0 - 2.0 * t, power) / 2.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
