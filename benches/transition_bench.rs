//! Per-frame cost of the camera hand-off.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Quat, Vec3};
use orbit_glide::camera::{CameraTransitionController, Pose};
use orbit_glide::options::Options;
use orbit_glide::util::easing::EasingFunction;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicInOut;
    c.bench_function("cubic_in_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.37))))
    });
}

fn tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller_tick");

    group.bench_function("hand_off", |b| {
        let mut ctrl = CameraTransitionController::from_options(&Options::default());
        b.iter(|| {
            ctrl.on_interaction_start();
            ctrl.set_pose(Pose::new(Vec3::new(4.0, 1.0, 0.0), Quat::IDENTITY));
            ctrl.on_interaction_end();
            black_box(ctrl.tick(black_box(1.0 / 60.0)))
        });
    });

    group.bench_function("on_path", |b| {
        let mut ctrl = CameraTransitionController::from_options(&Options::default());
        for _ in 0..200 {
            let _ = ctrl.tick(1.0 / 60.0);
        }
        b.iter(|| black_box(ctrl.tick(black_box(1.0 / 60.0))));
    });

    group.finish();
}

criterion_group!(benches, easing_benchmark, tick_benchmark);
criterion_main!(benches);
