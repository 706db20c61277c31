//! Continuous-value plumbing: breakpoint interpolation and easing curves.

pub mod ease;
pub mod interp;
