//! Headless pose trace: steps the camera without a window and writes one
//! JSON object per frame.

use std::io::Write;

use glam::{Quat, Vec3};
use serde::Serialize;

use crate::camera::CameraTransitionController;
use crate::error::GlideError;
use crate::options::Options;

/// One traced frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TraceFrame {
    /// Zero-based frame index.
    pub frame: u64,
    /// Path angle after the tick.
    pub theta: f32,
    /// Hand-off progress after the tick.
    pub progress: f32,
    /// Camera position.
    pub position: Vec3,
    /// Camera orientation.
    pub orientation: Quat,
}

/// Step a fresh controller `frames` times at `1 / target_fps` and write each
/// resulting frame to `out` as a JSON line.
pub fn write_trace<W: Write>(
    options: &Options,
    frames: u64,
    out: &mut W,
) -> Result<(), GlideError> {
    let mut controller = CameraTransitionController::from_options(options);
    let dt = 1.0 / options.transition.target_fps.max(1.0);

    for frame in 0..frames {
        let pose = controller.tick(dt);
        let record = TraceFrame {
            frame,
            theta: controller.theta(),
            progress: controller.state().progress,
            position: pose.position,
            orientation: pose.orientation,
        };
        serde_json::to_writer(&mut *out, &record)
            .map_err(|e| GlideError::Io(e.into()))?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    log::info!("traced {frames} frames");
    Ok(())
}
