//! Camera system for the orbiting scene camera.
//!
//! A scripted orbit drives the camera by default; mouse orbit interaction
//! takes over while the user drags, and an eased hand-off returns the camera
//! to the orbit afterwards.

/// Projection and GPU uniform types.
pub mod core;
/// Window-event-based orbit input handler.
#[cfg(feature = "viewer")]
pub mod input;
/// Mouse orbit controls and the interaction source trait.
pub mod orbit;
/// Scripted camera paths.
pub mod path;
/// Camera pose (position + orientation).
pub mod pose;
/// Per-frame wiring of interaction source and controller.
pub mod rig;
/// Transition controller between interaction and the scripted path.
pub mod transition;

pub use orbit::{InteractionSource, OrbitControls};
pub use path::{OrbitPath, ScriptedPath};
pub use pose::Pose;
pub use rig::CameraRig;
pub use transition::{
    CameraTransitionController, InteractionEvent, TickMode, TransitionState,
};
