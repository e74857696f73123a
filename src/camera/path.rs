use glam::{EulerRot, Quat, Vec3};

use super::pose::Pose;

/// Deterministic camera path sampled by an accumulating angle.
///
/// Implementations must be pure: the same `theta` always yields the same
/// pose.
pub trait ScriptedPath {
    /// Pose on the path at angle `theta` (radians).
    fn sample(&self, theta: f32) -> Pose;
}

impl<F> ScriptedPath for F
where
    F: Fn(f32) -> Pose,
{
    fn sample(&self, theta: f32) -> Pose {
        self(theta)
    }
}

/// Horizontal orbit around the origin with a vertical bob.
///
/// Position is `(sin θ · radius, sin θ · bob, cos θ · radius)`; orientation
/// is a yaw of `-θ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPath {
    /// Horizontal orbit radius.
    pub radius: f32,
    /// Vertical bob amplitude.
    pub bob: f32,
}

impl Default for OrbitPath {
    fn default() -> Self {
        Self {
            radius: 3.0,
            bob: 1.0,
        }
    }
}

impl OrbitPath {
    /// Create an orbit path.
    #[must_use]
    pub const fn new(radius: f32, bob: f32) -> Self {
        Self { radius, bob }
    }
}

impl ScriptedPath for OrbitPath {
    fn sample(&self, theta: f32) -> Pose {
        let (sin, cos) = theta.sin_cos();
        Pose {
            position: Vec3::new(sin * self.radius, sin * self.bob, cos * self.radius),
            orientation: Quat::from_euler(EulerRot::XYZ, 0.0, -theta, 0.0),
        }
    }
}
