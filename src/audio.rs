//! Frame-driven audio signals for the host mixer.

pub mod fade;
