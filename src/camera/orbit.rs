use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use super::pose::Pose;
use super::transition::InteractionEvent;
use crate::options::OrbitOptions;

/// Frame rate the damping retention curve is normalized to.
const DAMPING_REFERENCE_FPS: f32 = 60.0;

/// A source of user-driven camera motion.
///
/// The source queues [`InteractionEvent`]s as the user grabs and releases
/// the camera, and writes the pose while the controller reports that the
/// user is interacting.
pub trait InteractionSource {
    /// Move queued interaction events into `events`, oldest first.
    fn drain_events(&mut self, events: &mut Vec<InteractionEvent>);

    /// Write the user-driven pose for this frame.
    fn update(&mut self, pose: &mut Pose, dt: f32);
}

/// Mouse-driven orbit around a target point.
///
/// Rotation is spherical about `target`, with the polar angle held within
/// [`OrbitOptions::polar_range`]. The spherical state is re-read from the
/// camera pose at the start of every interaction, so the user always picks
/// up from wherever the scripted path left the camera.
pub struct OrbitControls {
    options: OrbitOptions,
    target: Vec3,

    radius: f32,
    theta: f32,
    phi: f32,

    rotate_delta: Vec2,
    pan_delta: Vec3,
    zoom_scale: f32,
    screen_height: f32,

    dragging: bool,
    needs_sync: bool,
    release_after_update: bool,
    pending: Vec<InteractionEvent>,
}

impl OrbitControls {
    /// Create controls orbiting the origin.
    #[must_use]
    pub fn new(options: OrbitOptions) -> Self {
        Self {
            options,
            target: Vec3::ZERO,
            radius: 10.0,
            theta: 0.0,
            phi: std::f32::consts::FRAC_PI_2,
            rotate_delta: Vec2::ZERO,
            pan_delta: Vec3::ZERO,
            zoom_scale: 1.0,
            screen_height: 1.0,
            dragging: false,
            needs_sync: true,
            release_after_update: false,
            pending: Vec::new(),
        }
    }

    /// Update the viewport height used to convert pixels to radians.
    pub fn resize(&mut self, _width: u32, height: u32) {
        self.screen_height = height.max(1) as f32;
    }

    /// The user pressed the orbit button.
    pub fn begin_drag(&mut self) {
        if self.dragging {
            return;
        }
        self.dragging = true;
        // Motion left over from an earlier drag belongs to a pose the
        // camera has since left.
        self.rotate_delta = Vec2::ZERO;
        self.pan_delta = Vec3::ZERO;
        // A wheel interaction already in flight is absorbed into this drag.
        if self.release_after_update {
            self.release_after_update = false;
        } else {
            self.zoom_scale = 1.0;
            self.needs_sync = true;
            self.pending.push(InteractionEvent::Start);
        }
    }

    /// The user released the orbit button.
    pub fn end_drag(&mut self) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        self.pending.push(InteractionEvent::End);
    }

    /// Accumulate a rotation from a cursor delta in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        if !self.dragging {
            return;
        }
        let per_pixel = TAU / self.screen_height * self.options.rotate_speed;
        self.rotate_delta -= delta * per_pixel;
    }

    /// Accumulate a pan from a cursor delta in pixels. Ignored unless
    /// panning is enabled.
    pub fn pan(&mut self, delta: Vec2) {
        if !self.dragging || !self.options.enable_pan {
            return;
        }
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let forward = -Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta);
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();

        let world_per_pixel = self.radius / self.screen_height * self.options.pan_speed;
        self.pan_delta += (right * -delta.x + up * delta.y) * world_per_pixel;
    }

    /// Zoom by a wheel delta (positive = closer).
    ///
    /// A wheel step outside a drag counts as a complete interaction of its
    /// own: it starts one now and ends it after the next update.
    pub fn zoom(&mut self, scroll: f32) {
        if scroll == 0.0 || !scroll.is_finite() {
            return;
        }
        if !self.dragging && !self.release_after_update {
            self.needs_sync = true;
            self.release_after_update = true;
            self.pending.push(InteractionEvent::Start);
        }
        let scale = (1.0 - self.options.zoom_speed).powf(scroll.abs());
        if scroll > 0.0 {
            self.zoom_scale *= scale;
        } else {
            self.zoom_scale /= scale;
        }
    }

    /// Whether the orbit button is held.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether secondary-button panning is enabled.
    #[must_use]
    pub fn pan_enabled(&self) -> bool {
        self.options.enable_pan
    }

    /// Current orbit distance.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Current polar angle (0 = straight above the target).
    #[must_use]
    pub fn phi(&self) -> f32 {
        self.phi
    }

    /// Current orbit target.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    fn sync_from(&mut self, position: Vec3) {
        let offset = position - self.target;
        let radius = offset.length();
        if radius > 0.0 && radius.is_finite() {
            self.radius = radius;
            self.theta = offset.x.atan2(offset.z);
            self.phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        }
    }

    fn apply_rotation(&mut self, dt: f32) {
        let damping = self.options.damping_factor.clamp(0.0, 1.0);
        if damping >= 1.0 {
            self.theta += self.rotate_delta.x;
            self.phi += self.rotate_delta.y;
            self.rotate_delta = Vec2::ZERO;
        } else {
            let retention = (1.0 - damping).powf(dt.max(0.0) * DAMPING_REFERENCE_FPS);
            let applied = self.rotate_delta * (1.0 - retention);
            self.theta += applied.x;
            self.phi += applied.y;
            self.rotate_delta *= retention;
        }
        let (min_phi, max_phi) = self.options.polar_range();
        self.phi = self.phi.clamp(min_phi, max_phi);
    }
}

impl InteractionSource for OrbitControls {
    fn drain_events(&mut self, events: &mut Vec<InteractionEvent>) {
        events.append(&mut self.pending);
    }

    fn update(&mut self, pose: &mut Pose, dt: f32) {
        if self.needs_sync {
            self.sync_from(pose.position);
            self.needs_sync = false;
        }

        self.apply_rotation(dt);
        self.target += self.pan_delta;
        self.pan_delta = Vec3::ZERO;
        self.radius = (self.radius * self.zoom_scale)
            .clamp(self.options.min_distance, self.options.max_distance);
        self.zoom_scale = 1.0;

        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let offset = Vec3::new(
            self.radius * sin_phi * sin_theta,
            self.radius * cos_phi,
            self.radius * sin_phi * cos_theta,
        );
        *pose = Pose::looking_at(self.target + offset, self.target, Vec3::Y);

        if self.release_after_update {
            self.release_after_update = false;
            self.pending.push(InteractionEvent::End);
        }
    }
}
