//! Standalone camera window backed by winit.
//!
//! The window routes mouse input into [`OrbitControls`], ticks the camera
//! rig once per redraw, and keeps the GPU-ready uniforms current. Drawing
//! the scene with those uniforms is left to the host renderer; the window
//! title reports the live camera state.
//!
//! ```no_run
//! # use orbit_glide::viewer::Viewer;
//! Viewer::builder()
//!     .with_title("orbit")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    camera::{
        core::{CameraUniform, Projection},
        input::InputHandler,
        CameraRig, CameraTransitionController, OrbitControls,
    },
    error::GlideError,
    options::Options,
    postprocess::EffectUniforms,
    util::frame_timing::FrameTiming,
};

/// How often the window title is refreshed.
const TITLE_INTERVAL: Duration = Duration::from_millis(250);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with default options and the title "orbit-glide".
    fn new() -> Self {
        Self {
            options: None,
            title: "orbit-glide".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title prefix.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window driving the orbit camera.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), GlideError> {
        let event_loop =
            EventLoop::new().map_err(|e| GlideError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let controller = CameraTransitionController::from_options(&self.options);
        let controls = OrbitControls::new(self.options.orbit.clone());
        let mut app = ViewerApp {
            window: None,
            rig: CameraRig::new(controller, controls),
            input: InputHandler::new(),
            timing: FrameTiming::new(Duration::from_millis(100)),
            projection: Projection::from_options(&self.options.camera, 1, 1),
            camera_uniform: CameraUniform::new(),
            effects: EffectUniforms::from_options(&self.options.post_processing),
            last_title: Instant::now(),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| GlideError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    rig: CameraRig<OrbitControls>,
    input: InputHandler,
    timing: FrameTiming,
    projection: Projection,
    camera_uniform: CameraUniform,
    effects: EffectUniforms,
    last_title: Instant,
    title: String,
}

impl ViewerApp {
    fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
        self.rig.source_mut().resize(width, height);
    }

    fn redraw(&mut self) {
        let dt = self.timing.begin_frame();
        let pose = self.rig.frame(dt);
        self.camera_uniform.update(&pose, &self.projection);

        if self.last_title.elapsed() >= TITLE_INTERVAL {
            self.last_title = Instant::now();
            let controller = self.rig.controller();
            let mode = if controller.is_interacting() {
                "manual".to_owned()
            } else if controller.is_transitioning() {
                format!("easing {:.0}%", controller.state().progress * 100.0)
            } else {
                "orbit".to_owned()
            };
            let [x, y, z] = self.camera_uniform.position;
            if let Some(window) = &self.window {
                window.set_title(&format!(
                    "{} | {mode} | ({x:.2}, {y:.2}, {z:.2}) | {:.0} fps",
                    self.title,
                    self.timing.fps(),
                ));
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = Window::default_attributes().with_title(self.title.clone());
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.resize(size.width.max(1), size.height.max(1));
        log::info!(
            "viewer started at {}x{} (bloom {:.2}, afterimage {:.2}, displacement {:.3})",
            size.width,
            size.height,
            self.effects.bloom.strength,
            self.effects.afterimage.damp,
            self.effects.displacement.scale,
        );

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        self.input.handle_event(self.rig.source_mut(), &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.resize(size.width.max(1), size.height.max(1));
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => (),
        }
    }
}
