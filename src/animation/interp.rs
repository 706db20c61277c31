use crate::foundation::error::{CuelineError, CuelineResult};

/// Policy for inputs outside the breakpoint range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Extrapolate {
    /// Hold the edge output value (default).
    #[default]
    Clamp,
    /// Continue the edge segment's line past the breakpoint.
    Extend,
}

/// Options for [`interpolate`]; the default clamps on both edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InterpOptions {
    /// Policy below the first input breakpoint.
    pub left: Extrapolate,
    /// Policy above the last input breakpoint.
    pub right: Extrapolate,
}

/// Piecewise-linear interpolation over a paired breakpoint sequence.
///
/// `input` must be strictly increasing with at least two entries; `output`
/// is paired index-for-index. For `x` between `input[i]` and `input[i + 1]`
/// the result is the linear blend of `output[i]` and `output[i + 1]`; outside
/// the range the edge policy in `opts` applies.
///
/// # Errors
///
/// [`CuelineError::DegenerateRange`] when two adjacent input breakpoints are
/// equal (never divides by zero), [`CuelineError::Validation`] for too-short,
/// mispaired, non-finite or decreasing sequences and for a non-finite `x`.
pub fn interpolate(
    x: f64,
    input: &[f64],
    output: &[f64],
    opts: InterpOptions,
) -> CuelineResult<f64> {
    validate_breakpoints(input, output)?;
    if !x.is_finite() {
        return Err(CuelineError::validation("interpolation input must be finite"));
    }

    let n = input.len();
    if x <= input[0] {
        return Ok(match opts.left {
            Extrapolate::Clamp => output[0],
            Extrapolate::Extend => lerp_segment(x, input[0], input[1], output[0], output[1]),
        });
    }
    if x >= input[n - 1] {
        return Ok(match opts.right {
            Extrapolate::Clamp => output[n - 1],
            Extrapolate::Extend => {
                lerp_segment(x, input[n - 2], input[n - 1], output[n - 2], output[n - 1])
            }
        });
    }

    // First breakpoint strictly above x; x is interior, so hi is in 1..n.
    let hi = input.partition_point(|v| *v <= x);
    let lo = hi - 1;
    Ok(lerp_segment(x, input[lo], input[hi], output[lo], output[hi]))
}

fn lerp_segment(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    y0 + (y1 - y0) * ((x - x0) / (x1 - x0))
}

fn validate_breakpoints(input: &[f64], output: &[f64]) -> CuelineResult<()> {
    if input.len() < 2 {
        return Err(CuelineError::validation(
            "interpolate needs at least 2 input breakpoints",
        ));
    }
    if output.len() != input.len() {
        return Err(CuelineError::validation(format!(
            "breakpoint sequences must pair up ({} inputs vs {} outputs)",
            input.len(),
            output.len()
        )));
    }
    if input.iter().chain(output).any(|v| !v.is_finite()) {
        return Err(CuelineError::validation(
            "breakpoints must be finite numbers",
        ));
    }
    for w in input.windows(2) {
        if w[0] == w[1] {
            return Err(CuelineError::degenerate_range(format!(
                "zero-width input interval at breakpoint {}",
                w[0]
            )));
        }
        if w[0] > w[1] {
            return Err(CuelineError::validation(
                "input breakpoints must be strictly increasing",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
