use super::orbit::InteractionSource;
use super::path::{OrbitPath, ScriptedPath};
use super::pose::Pose;
use super::transition::{CameraTransitionController, InteractionEvent};

/// Per-frame wiring between an interaction source and the transition
/// controller.
///
/// Each frame the source's queued events are applied first, then the source
/// writes the pose if the user is interacting, then the controller ticks. A
/// release gives the source one last write so the hand-off starts from the
/// final user pose.
pub struct CameraRig<S, P = OrbitPath> {
    controller: CameraTransitionController<P>,
    source: S,
    events: Vec<InteractionEvent>,
}

impl<S: InteractionSource, P: ScriptedPath> CameraRig<S, P> {
    /// Wire `source` into `controller`.
    pub fn new(controller: CameraTransitionController<P>, source: S) -> Self {
        Self {
            controller,
            source,
            events: Vec::new(),
        }
    }

    /// Run one frame and return the camera pose to render with.
    pub fn frame(&mut self, dt: f32) -> Pose {
        self.source.drain_events(&mut self.events);
        for event in self.events.drain(..) {
            // Motion queued alongside the release lands before the hand-off
            // snapshots the pose.
            if event == InteractionEvent::End && self.controller.is_interacting() {
                self.source.update(self.controller.pose_mut(), dt);
            }
            self.controller.handle_event(event);
        }
        if self.controller.is_interacting() {
            self.source.update(self.controller.pose_mut(), dt);
        }
        self.controller.tick(dt)
    }

    /// The transition controller.
    pub fn controller(&self) -> &CameraTransitionController<P> {
        &self.controller
    }

    /// The interaction source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable interaction source, for routing input events.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
