//! The segment tree, its absolute-frame resolution, and per-frame selection.

pub mod active;
pub mod resolve;
pub mod segment;
pub mod transition;
