use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::camera::orbit::OrbitControls;

/// Routes winit window events into [`OrbitControls`].
///
/// Left drag orbits; right drag pans when panning is enabled; the wheel
/// zooms.
pub struct InputHandler {
    last_mouse_pos: Vec2,
    orbiting: bool,
    panning: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Create a handler with no buttons held.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_mouse_pos: Vec2::ZERO,
            orbiting: false,
            panning: false,
        }
    }

    /// Feed one window event to the controls.
    pub fn handle_event(&mut self, controls: &mut OrbitControls, event: &WindowEvent) {
        match event {
            WindowEvent::MouseInput { button, state, .. } => {
                self.on_button(controls, *button, *state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let current_pos =
                    Vec2::new(position.x as f32, position.y as f32);
                let delta = current_pos - self.last_mouse_pos;
                self.last_mouse_pos = current_pos;
                self.on_cursor_delta(controls, delta);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                controls.zoom(scroll);
            }
            WindowEvent::Resized(size) => {
                controls.resize(size.width, size.height);
            }
            _ => {}
        }
    }

    /// The drag lasts while either the orbit or the pan button is held.
    fn on_button(&mut self, controls: &mut OrbitControls, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.orbiting = pressed,
            MouseButton::Right if controls.pan_enabled() => self.panning = pressed,
            _ => return,
        }
        if pressed {
            controls.begin_drag();
        } else if !self.orbiting && !self.panning {
            controls.end_drag();
        }
    }

    fn on_cursor_delta(&self, controls: &mut OrbitControls, delta: Vec2) {
        if !controls.is_dragging() {
            return;
        }
        if self.panning {
            controls.pan(delta);
        } else {
            controls.rotate(delta);
        }
    }
}
