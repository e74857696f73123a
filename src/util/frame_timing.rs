//! Frame delta and FPS tracking for the viewer loop.

use web_time::{Duration, Instant};

/// Frame timing with per-frame delta and smoothed FPS.
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Duration of the most recent frame
    last_dt: Duration,
    /// Upper bound on a reported frame delta
    max_dt: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer.
    ///
    /// `max_dt` caps the delta reported after a stall (window drag, debugger
    /// break) so elapsed-time ticking does not jump.
    #[must_use]
    pub fn new(max_dt: Duration) -> Self {
        Self {
            last_frame: Instant::now(),
            last_dt: Duration::ZERO,
            max_dt,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Call once per frame. Returns the capped time since the previous call,
    /// in seconds.
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed)
    }

    fn record(&mut self, elapsed: Duration) -> f32 {
        self.last_dt = elapsed.min(self.max_dt);

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        self.last_dt.as_secs_f32()
    }

    /// Most recent capped frame delta in seconds.
    #[must_use]
    pub fn dt(&self) -> f32 {
        self.last_dt.as_secs_f32()
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
