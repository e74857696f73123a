//! Easing functions for camera transitions.
//!
//! Each curve maps normalized progress to an eased fraction. The curves are
//! cheap enough to evaluate every frame.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Cubic ease-in-out: `4x³` below the midpoint, `1 − (−2x+2)³/2` above it.
///
/// Not clamped. Inputs slightly above 1.0 extrapolate past 1.0, which the
/// transition controller relies on for its final interpolated frame.
#[inline]
#[must_use]
pub fn cubic_ease_in_out(x: f32) -> f32 {
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        let k = -2.0 * x + 2.0;
        1.0 - k * k * k / 2.0
    }
}

/// Easing function variants for transition curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic ease-in-out (slow start, fast middle, slow end).
    #[default]
    CubicInOut,
}

impl EasingFunction {
    /// Evaluate the easing function at `t`.
    ///
    /// Input is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        self.evaluate_unclamped(t.clamp(0.0, 1.0))
    }

    /// Evaluate without clamping the input.
    #[inline]
    #[must_use]
    pub fn evaluate_unclamped(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::CubicInOut => cubic_ease_in_out(t),
        }
    }
}
