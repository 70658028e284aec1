//! Frame delta timing for the animation tick.

use web_time::{Duration, Instant};

/// Longest step a single frame may advance animation by. A backgrounded
/// tab can stall for seconds; without a cap the spin would jump.
pub const MAX_FRAME_STEP: Duration = Duration::from_millis(100);

/// Per-frame delta clock with a smoothed FPS readout.
pub struct FrameClock {
    /// Last frame timestamp
    last_frame: Option<Instant>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a clock; the first [`Self::tick`] reports a zero delta.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: None,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    // 5% new value, 95% old value
        }
    }

    /// Mark a frame at `now` and return the seconds since the previous one,
    /// capped at [`MAX_FRAME_STEP`].
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let Some(last) = self.last_frame.replace(now) else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(last);

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        elapsed.min(MAX_FRAME_STEP).as_secs_f32()
    }

    /// Mark a frame now. See [`Self::tick_at`].
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Forget the previous frame so the next tick reports zero (e.g. after
    /// a structure reload suppressed rendering for a while).
    pub fn restart(&mut self) {
        self.last_frame = None;
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
