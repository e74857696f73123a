//! Hand-off between user orbit interaction and the scripted camera path.
//!
//! While the user drags, the controller only mirrors the pose written by the
//! interaction source. When the drag ends it eases from the released pose
//! back onto the scripted path over a fixed number of ticks, then follows
//! the path exactly.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::path::{OrbitPath, ScriptedPath};
use super::pose::Pose;
use crate::options::{Options, TransitionOptions};
use crate::util::easing::EasingFunction;

/// Interaction notifications from an orbit/pointer source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionEvent {
    /// The user grabbed the camera.
    Start,
    /// The user released the camera.
    End,
}

/// How per-tick increments relate to frame time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TickMode {
    /// Every tick advances by exactly one step; `dt` is ignored. Motion
    /// speed depends on the host frame rate.
    #[default]
    Fixed,
    /// Steps are scaled by `dt · target_fps`, so motion speed is the same at
    /// any frame rate.
    Elapsed,
}

/// Mutable hand-off state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionState {
    /// Whether the user is currently driving the camera.
    pub interacting: bool,
    /// Un-eased hand-off fraction since interaction last ended.
    ///
    /// Can exceed 1.0 by up to one step on the final interpolated tick.
    pub progress: f32,
    /// Pose the hand-off starts from. Only meaningful while not interacting
    /// and `progress < 1`.
    pub start_pose: Pose,
}

/// Camera controller switching between mirrored user input and an eased
/// scripted orbit.
///
/// Driven once per frame via [`tick`](Self::tick); interaction notifications
/// arrive through [`on_interaction_start`](Self::on_interaction_start) and
/// [`on_interaction_end`](Self::on_interaction_end) (or
/// [`handle_event`](Self::handle_event)) and take effect immediately.
#[derive(Debug, Clone)]
pub struct CameraTransitionController<P = OrbitPath> {
    path: P,
    theta: f32,
    state: TransitionState,
    pose: Pose,

    theta_step: f32,
    progress_step: f32,
    target_fps: f32,
    tick_mode: TickMode,
    easing: EasingFunction,
    look_at: Vec3,
    up: Vec3,
}

impl CameraTransitionController<OrbitPath> {
    /// Build the default orbit controller from the full options set.
    ///
    /// The camera starts at `camera.initial_position` facing the look-at
    /// point, and the first ticks ease from there onto the orbit.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let transition = &options.transition;
        let look_at = Vec3::from_array(transition.look_at);
        let initial = Pose::looking_at(
            Vec3::from_array(options.camera.initial_position),
            look_at,
            Vec3::Y,
        );
        let path = OrbitPath::new(transition.orbit_radius, transition.orbit_bob);
        Self::new(path, transition, initial)
    }
}

impl<P: ScriptedPath> CameraTransitionController<P> {
    /// Create a controller following `path`, starting a hand-off from
    /// `initial_pose`.
    #[must_use]
    pub fn new(path: P, options: &TransitionOptions, initial_pose: Pose) -> Self {
        Self {
            path,
            theta: 0.0,
            state: TransitionState {
                interacting: false,
                progress: 0.0,
                start_pose: initial_pose,
            },
            pose: initial_pose,
            theta_step: options.theta_step,
            progress_step: options.progress_step(),
            target_fps: options.target_fps,
            tick_mode: options.tick_mode,
            easing: options.easing,
            look_at: Vec3::from_array(options.look_at),
            up: Vec3::Y,
        }
    }

    /// User grabbed the camera: cancel any running hand-off and snapshot the
    /// current pose.
    pub fn on_interaction_start(&mut self) {
        if !self.state.interacting && self.state.progress > 0.0 && self.state.progress < 1.0 {
            log::debug!(
                "interaction interrupted hand-off at progress {:.3}",
                self.state.progress
            );
        }
        self.state.interacting = true;
        self.state.progress = 0.0;
        self.state.start_pose = self.pose;
    }

    /// User released the camera: start a fresh hand-off from the current
    /// pose.
    pub fn on_interaction_end(&mut self) {
        self.state.interacting = false;
        self.state.start_pose = self.pose;
        self.state.progress = 0.0;
        log::debug!(
            "hand-off started from {:?} at theta {:.3}",
            self.pose.position,
            self.theta
        );
    }

    /// Dispatch an interaction event.
    pub fn handle_event(&mut self, event: InteractionEvent) {
        match event {
            InteractionEvent::Start => self.on_interaction_start(),
            InteractionEvent::End => self.on_interaction_end(),
        }
    }

    /// Advance one frame and return the resulting pose.
    ///
    /// θ advances in every mode. While interacting the pose is left as the
    /// interaction source wrote it and the hand-off start is refreshed from
    /// it. Otherwise the pose eases from the start pose toward the path, or
    /// sits exactly on the path once progress reaches 1. The camera is then
    /// turned toward the look-at point regardless of mode.
    pub fn tick(&mut self, dt: f32) -> Pose {
        let scale = self.tick_scale(dt);
        self.theta += self.theta_step * scale;
        let target = self.path.sample(self.theta);

        if self.state.interacting {
            self.state.start_pose = self.pose;
        } else if self.state.progress < 1.0 {
            // A long frame may not carry progress further past 1 than a
            // single fixed step would.
            let limit = (self.state.progress + self.progress_step).max(1.0);
            self.state.progress = (self.state.progress + self.progress_step * scale).min(limit);
            // Unclamped: the last interpolated tick may see progress > 1.
            let eased = self.easing.evaluate_unclamped(self.state.progress);
            self.pose = self.state.start_pose.interpolate(&target, eased);
            if self.state.progress >= 1.0 {
                log::debug!("hand-off complete at theta {:.3}", self.theta);
            }
        } else {
            self.pose = target;
        }

        self.pose.look_at(self.look_at, self.up);

        log::trace!(
            "tick theta={:.4} progress={:.4} interacting={} pos={:?}",
            self.theta,
            self.state.progress,
            self.state.interacting,
            self.pose.position
        );
        self.pose
    }

    /// Overwrite the camera pose (the interaction source's write path).
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// Current camera pose.
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Mutable access to the camera pose for in-place interaction updates.
    pub fn pose_mut(&mut self) -> &mut Pose {
        &mut self.pose
    }

    /// Current hand-off state.
    #[must_use]
    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    /// Accumulated path angle in radians.
    #[must_use]
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Whether the user is driving the camera.
    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.state.interacting
    }

    /// Whether an eased hand-off is still running.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        !self.state.interacting && self.state.progress < 1.0
    }

    /// The scripted path being followed.
    #[must_use]
    pub fn path(&self) -> &P {
        &self.path
    }

    /// Point the camera is turned toward after each tick.
    #[must_use]
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    fn tick_scale(&self, dt: f32) -> f32 {
        match self.tick_mode {
            TickMode::Fixed => 1.0,
            TickMode::Elapsed if dt.is_finite() => dt.max(0.0) * self.target_fps,
            TickMode::Elapsed => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn controller() -> CameraTransitionController {
        CameraTransitionController::from_options(&Options::default())
    }

    #[test]
    fn from_options_starts_at_initial_position() {
        let ctrl = controller();
        assert_eq!(ctrl.pose().position, Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(ctrl.theta(), 0.0);
        assert!(ctrl.is_transitioning());
    }

    #[test]
    fn theta_advances_in_every_mode() {
        let mut ctrl = controller();
        let _ = ctrl.tick(DT);
        assert_eq!(ctrl.theta(), 0.005);
        ctrl.on_interaction_start();
        let _ = ctrl.tick(DT);
        assert_eq!(ctrl.theta(), 0.01);
        ctrl.on_interaction_end();
        let _ = ctrl.tick(DT);
        assert!((ctrl.theta() - 0.015).abs() < 1e-7);
    }

    #[test]
    fn interaction_leaves_position_alone() {
        let mut ctrl = controller();
        ctrl.on_interaction_start();
        let user = Pose::new(Vec3::new(-4.0, 0.5, 1.0), Quat::IDENTITY);
        ctrl.set_pose(user);
        let pose = ctrl.tick(DT);
        assert_eq!(pose.position, user.position);
        assert_eq!(ctrl.state().progress, 0.0);
    }

    #[test]
    fn fixed_mode_ignores_dt() {
        let mut a = controller();
        let mut b = controller();
        let _ = a.tick(DT);
        let _ = b.tick(0.5);
        assert_eq!(a.pose(), b.pose());
        assert_eq!(a.state().progress, b.state().progress);
    }

    #[test]
    fn elapsed_mode_matches_fixed_at_target_rate() {
        let mut opts = Options::default();
        let mut fixed = CameraTransitionController::from_options(&opts);
        opts.transition.tick_mode = TickMode::Elapsed;
        let mut elapsed = CameraTransitionController::from_options(&opts);

        for _ in 0..30 {
            let _ = fixed.tick(DT);
            let _ = elapsed.tick(DT);
        }
        assert!((fixed.theta() - elapsed.theta()).abs() < 1e-5);
        assert!((fixed.state().progress - elapsed.state().progress).abs() < 1e-5);
    }

    #[test]
    fn elapsed_mode_halves_step_at_double_rate() {
        let mut opts = Options::default();
        opts.transition.tick_mode = TickMode::Elapsed;
        let mut ctrl = CameraTransitionController::from_options(&opts);
        let _ = ctrl.tick(DT / 2.0);
        assert!((ctrl.theta() - 0.0025).abs() < 1e-7);
        assert!((ctrl.state().progress - 1.0 / 240.0).abs() < 1e-7);
    }

    #[test]
    fn elapsed_mode_ignores_bad_dt() {
        let mut opts = Options::default();
        opts.transition.tick_mode = TickMode::Elapsed;
        let mut ctrl = CameraTransitionController::from_options(&opts);
        let _ = ctrl.tick(f32::NAN);
        let _ = ctrl.tick(-1.0);
        assert_eq!(ctrl.theta(), 0.0);
        assert_eq!(ctrl.state().progress, 0.0);
    }

    #[test]
    fn handle_event_dispatches() {
        let mut ctrl = controller();
        ctrl.handle_event(InteractionEvent::Start);
        assert!(ctrl.is_interacting());
        assert!(!ctrl.is_transitioning());
        ctrl.handle_event(InteractionEvent::End);
        assert!(!ctrl.is_interacting());
        assert!(ctrl.is_transitioning());
    }

    #[test]
    fn progress_overshoots_by_at_most_one_step() {
        let mut ctrl = controller();
        let step = Options::default().transition.progress_step();
        let mut ticks = 0;
        while ctrl.state().progress < 1.0 {
            let _ = ctrl.tick(DT);
            ticks += 1;
            assert!(ticks <= 200, "hand-off never finished");
        }
        assert!((120..=121).contains(&ticks), "took {ticks} ticks");
        assert!(ctrl.state().progress < 1.0 + step);
        assert!(ctrl.pose().is_finite());
    }

    #[test]
    fn long_elapsed_frame_lands_on_path() {
        let mut opts = Options::default();
        opts.transition.tick_mode = TickMode::Elapsed;
        let mut ctrl = CameraTransitionController::from_options(&opts);
        ctrl.on_interaction_start();
        ctrl.set_pose(Pose::new(Vec3::X, Quat::IDENTITY));
        ctrl.on_interaction_end();

        let pose = ctrl.tick(5.0);
        assert_eq!(ctrl.state().progress, 1.0);
        let target = ctrl.path().sample(ctrl.theta());
        assert!((pose.position - target.position).length() < 1e-5);
        assert!(pose.position.length() < 4.0);
    }

    #[test]
    fn elapsed_overshoot_is_at_most_one_step() {
        let mut opts = Options::default();
        opts.transition.tick_mode = TickMode::Elapsed;
        let step = opts.transition.progress_step();
        let mut ctrl = CameraTransitionController::from_options(&opts);
        while ctrl.state().progress < 0.99 {
            let _ = ctrl.tick(DT);
        }
        let before = ctrl.state().progress;
        let _ = ctrl.tick(1.0);
        assert!(ctrl.state().progress <= before + step + 1e-6);
        assert!(ctrl.state().progress < 1.0 + step);
        assert!(ctrl.pose().is_finite());
    }

    #[test]
    fn look_at_applies_every_tick() {
        let mut ctrl = controller();
        ctrl.on_interaction_start();
        ctrl.set_pose(Pose::new(Vec3::new(5.0, 0.0, 0.0), Quat::IDENTITY));
        let pose = ctrl.tick(DT);
        assert!((pose.forward() - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn custom_path_closure() {
        let opts = TransitionOptions {
            duration_secs: 0.0,
            ..TransitionOptions::default()
        };
        let path = |theta: f32| Pose::new(Vec3::new(theta, 0.0, 1.0), Quat::IDENTITY);
        let mut ctrl = CameraTransitionController::new(path, &opts, Pose::IDENTITY);
        let _ = ctrl.tick(DT);
        let pose = ctrl.tick(DT);
        assert_eq!(pose.position, Vec3::new(0.01, 0.0, 1.0));
    }
}
