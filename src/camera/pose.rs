use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Camera position and orientation in world space.
///
/// The orientation follows the usual camera convention: the camera looks
/// down its local -Z axis with +Y up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Rotation from camera-local to world space.
    pub orientation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    /// Pose at the origin with no rotation.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    /// Create a pose from its parts.
    #[must_use]
    pub const fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Pose at `position` facing `target`.
    #[must_use]
    pub fn looking_at(position: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            position,
            orientation: look_at_rotation(position, target, up),
        }
    }

    /// Lerp the position and slerp the orientation toward `other`.
    ///
    /// `t` is not clamped; values slightly past 1.0 extrapolate the position.
    #[must_use]
    pub fn interpolate(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            orientation: self.orientation.slerp(other.orientation, t),
        }
    }

    /// Re-orient in place so the camera faces `target`.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        self.orientation = look_at_rotation(self.position, target, up);
    }

    /// Unit vector the camera is facing.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Whether every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.orientation.is_finite()
    }
}

/// Rotation that points a camera at `eye` toward `target`.
///
/// Degenerate inputs are nudged rather than rejected: a zero-length view
/// direction falls back to +Z, and an `up` parallel to the view direction is
/// perturbed slightly off-axis.
#[must_use]
pub fn look_at_rotation(eye: Vec3, target: Vec3, up: Vec3) -> Quat {
    let mut z = eye - target;
    if z.length_squared() == 0.0 {
        z.z = 1.0;
    }
    z = z.normalize();

    let mut x = up.cross(z);
    if x.length_squared() == 0.0 {
        if up.z.abs() == 1.0 {
            z.x += 0.0001;
        } else {
            z.z += 0.0001;
        }
        z = z.normalize();
        x = up.cross(z);
    }
    x = x.normalize();
    let y = z.cross(x);

    Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize()
}
