//! End-to-end hand-off scenarios for the camera transition controller.

use glam::{Quat, Vec3};
use orbit_glide::camera::{
    CameraTransitionController, OrbitPath, Pose, ScriptedPath, TickMode,
};
use orbit_glide::options::{Options, TransitionOptions};
use orbit_glide::util::easing::cubic_ease_in_out;

const DT: f32 = 1.0 / 60.0;

fn controller_at_origin() -> CameraTransitionController {
    CameraTransitionController::new(
        OrbitPath::default(),
        &TransitionOptions::default(),
        Pose::IDENTITY,
    )
}

fn run(ctrl: &mut CameraTransitionController, ticks: usize) -> Pose {
    let mut pose = ctrl.pose();
    for _ in 0..ticks {
        pose = ctrl.tick(DT);
    }
    pose
}

#[test]
fn easing_endpoints_and_midpoint() {
    assert_eq!(cubic_ease_in_out(0.0), 0.0);
    assert_eq!(cubic_ease_in_out(0.5), 0.5);
    assert_eq!(cubic_ease_in_out(1.0), 1.0);
}

#[test]
fn start_pose_tracks_external_pose_while_interacting() {
    let mut ctrl = controller_at_origin();
    ctrl.on_interaction_start();

    for i in 0..10 {
        let external = Pose::new(
            Vec3::new(i as f32, 0.5, 4.0 - i as f32),
            Quat::from_rotation_y(i as f32 * 0.1),
        );
        ctrl.set_pose(external);
        let _ = ctrl.tick(DT);
        assert_eq!(ctrl.state().start_pose, external);
        assert_eq!(ctrl.state().progress, 0.0);
    }
}

#[test]
fn completed_hand_off_sits_exactly_on_path() {
    let mut ctrl = controller_at_origin();
    ctrl.on_interaction_start();
    ctrl.set_pose(Pose::new(Vec3::new(7.0, -2.0, 1.0), Quat::IDENTITY));
    ctrl.on_interaction_end();

    let pose = run(&mut ctrl, 125);
    assert!(ctrl.state().progress >= 1.0);
    assert!(!ctrl.is_transitioning());

    let target = OrbitPath::default().sample(ctrl.theta());
    assert_eq!(pose.position, target.position);

    let facing = Pose::looking_at(target.position, Vec3::ZERO, Vec3::Y);
    assert!(pose.orientation.angle_between(facing.orientation) < 1e-4);

    // Further ticks keep following the path with no residual error.
    let pose = run(&mut ctrl, 7);
    assert_eq!(
        pose.position,
        OrbitPath::default().sample(ctrl.theta()).position
    );
}

#[test]
fn first_tick_after_release_is_a_slight_blend() {
    let mut ctrl = controller_at_origin();
    assert_eq!(ctrl.theta(), 0.0);

    ctrl.on_interaction_start();
    let released = Pose::new(Vec3::new(1.0, 0.0, 0.0), Quat::IDENTITY);
    ctrl.set_pose(released);
    ctrl.on_interaction_end();

    let pose = ctrl.tick(DT);
    assert_eq!(ctrl.state().progress, 1.0 / 120.0);

    let target = OrbitPath::default().sample(ctrl.theta());
    assert_ne!(pose.position, released.position);
    assert_ne!(pose.position, target.position);
    assert!((pose.position - released.position).length() < 1e-3);
}

#[test]
fn interrupting_a_hand_off_does_not_jump() {
    let mut ctrl = controller_at_origin();
    ctrl.on_interaction_start();
    ctrl.set_pose(Pose::new(Vec3::new(1.0, 0.0, 0.0), Quat::IDENTITY));
    ctrl.on_interaction_end();

    let mid = run(&mut ctrl, 60);
    let progress = ctrl.state().progress;
    assert!(progress > 0.0 && progress < 1.0);

    ctrl.on_interaction_start();
    assert_eq!(ctrl.state().progress, 0.0);
    assert_eq!(ctrl.state().start_pose, mid);

    let held = ctrl.tick(DT);
    assert_eq!(held.position, mid.position);
    assert!(held.orientation.angle_between(mid.orientation) < 1e-5);
}

#[test]
fn repeated_release_is_idempotent() {
    let released = Pose::new(Vec3::new(2.0, 1.0, -1.0), Quat::IDENTITY);

    let mut once = controller_at_origin();
    once.on_interaction_start();
    once.set_pose(released);
    once.on_interaction_end();

    let mut twice = controller_at_origin();
    twice.on_interaction_start();
    twice.set_pose(released);
    twice.on_interaction_end();
    twice.on_interaction_end();

    assert_eq!(once.state(), twice.state());
    for _ in 0..150 {
        assert_eq!(once.tick(DT), twice.tick(DT));
    }
}

#[test]
fn startup_eases_from_initial_camera_position() {
    let mut ctrl = CameraTransitionController::from_options(&Options::default());
    let first = ctrl.tick(DT);
    assert!((first.position - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-3);

    let settled = run(&mut ctrl, 130);
    assert!((settled.position.length() - OrbitPath::default().sample(ctrl.theta()).position.length()).abs() < 1e-5);
}

#[test]
fn uneven_frames_never_throw_the_camera_off_the_orbit() {
    let options = TransitionOptions {
        tick_mode: TickMode::Elapsed,
        ..TransitionOptions::default()
    };
    let step = options.progress_step();
    let mut ctrl = CameraTransitionController::new(
        OrbitPath::default(),
        &options,
        Pose::IDENTITY,
    );
    ctrl.on_interaction_start();
    ctrl.set_pose(Pose::new(Vec3::new(1.0, 0.0, 0.0), Quat::IDENTITY));
    ctrl.on_interaction_end();

    let frames = [DT, 0.05, 0.3, DT, 1.0, 2.5, DT];
    for dt in frames.iter().cycle().take(60) {
        let pose = ctrl.tick(*dt);
        assert!(ctrl.state().progress < 1.0 + step);
        assert!(pose.is_finite());
        assert!(pose.position.length() < 4.0, "thrown to {:?}", pose.position);
    }
    let target = ctrl.path().sample(ctrl.theta());
    assert!((ctrl.pose().position - target.position).length() < 1e-5);
}
