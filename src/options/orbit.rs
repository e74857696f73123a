use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit Controls", inline)]
#[serde(default)]
/// Mouse orbit interaction limits and sensitivities.
pub struct OrbitOptions {
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Pan sensitivity multiplier (world units per pixel at unit distance).
    #[schemars(skip)]
    pub pan_speed: f32,
    /// Zoom sensitivity per wheel step.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Fraction of pending rotation applied per update (1.0 = immediate).
    #[schemars(title = "Damping", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping_factor: f32,
    /// Allowed deviation of the polar angle from the horizon, in radians.
    #[schemars(skip)]
    pub polar_limit: f32,
    /// Whether secondary-button drags pan the orbit target.
    #[schemars(skip)]
    pub enable_pan: bool,
    /// Closest allowed distance to the orbit target.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest allowed distance from the orbit target.
    #[schemars(skip)]
    pub max_distance: f32,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 1.0,
            pan_speed: 1.0,
            zoom_speed: 0.05,
            damping_factor: 1.0,
            polar_limit: PI / 7.0,
            enable_pan: false,
            min_distance: 0.5,
            max_distance: 100.0,
        }
    }
}

impl OrbitOptions {
    /// Polar angle range `[PI/2 − limit, PI/2 + limit]`, kept inside
    /// `(0, PI)`.
    #[must_use]
    pub fn polar_range(&self) -> (f32, f32) {
        const EPS: f32 = 1e-4;
        let limit = self.polar_limit.abs();
        (
            (PI / 2.0 - limit).max(EPS),
            (PI / 2.0 + limit).min(PI - EPS),
        )
    }
}
