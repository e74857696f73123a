//! Shared utilities.
//!
//! Easing curves for transitions and frame timing for the viewer loop.

pub mod easing;
pub mod frame_timing;
