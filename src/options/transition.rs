use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::transition::TickMode;
use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transition", inline)]
#[serde(default)]
/// Scripted orbit and the eased hand-off back to it after interaction.
pub struct TransitionOptions {
    /// Seconds to ease from the released pose back onto the scripted path.
    #[schemars(title = "Duration", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub duration_secs: f32,
    /// Frame rate the per-tick increments are tuned for.
    #[schemars(skip)]
    pub target_fps: f32,
    /// Orbit angle advanced per tick, in radians.
    #[schemars(title = "Orbit Speed", range(min = 0.0, max = 0.05), extend("step" = 0.001))]
    pub theta_step: f32,
    /// Whether ticks use fixed increments or scale them by elapsed time.
    #[schemars(skip)]
    pub tick_mode: TickMode,
    /// Easing curve for the hand-off.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// Horizontal radius of the scripted orbit.
    #[schemars(title = "Orbit Radius", range(min = 0.5, max = 20.0), extend("step" = 0.1))]
    pub orbit_radius: f32,
    /// Vertical bob amplitude of the scripted orbit.
    #[schemars(title = "Orbit Bob", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub orbit_bob: f32,
    /// Point the camera is turned toward after every tick.
    #[schemars(skip)]
    pub look_at: [f32; 3],
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration_secs: 2.0,
            target_fps: 60.0,
            theta_step: 0.005,
            tick_mode: TickMode::Fixed,
            easing: EasingFunction::CubicInOut,
            orbit_radius: 3.0,
            orbit_bob: 1.0,
            look_at: [0.0; 3],
        }
    }
}

impl TransitionOptions {
    /// Progress added per tick: `1 / (target_fps · duration_secs)`.
    ///
    /// A non-positive product yields 1.0, so the hand-off completes on the
    /// next tick.
    #[must_use]
    pub fn progress_step(&self) -> f32 {
        let frames = self.target_fps * self.duration_secs;
        if frames > 0.0 {
            1.0 / frames
        } else {
            1.0
        }
    }
}
