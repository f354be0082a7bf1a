//! Frame timing.
//!
//! [`Time`] measures what actually happened (frame count, FPS);
//! [`FrameLimiter`] decides when the next tick may start so the loop runs
//! at the target rate.
//!
//! ```ignore
//! let mut limiter = FrameLimiter::new(Duration::from_secs_f64(1.0 / 60.0));
//! let mut time = Time::new();
//!
//! // In the event loop:
//! if limiter.is_due(Instant::now()) {
//!     limiter.begin_tick(Instant::now());
//!     time.update();
//!     // ... tick and present ...
//! }
//! // Sleep until limiter.deadline()
//! ```

use std::time::{Duration, Instant};

/// Time tracking for the render loop.
#[derive(Debug)]
pub struct Time {
    /// Total frames since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
}

impl Time {
    /// Create a new time tracker starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Record a frame. Returns `true` when the FPS estimate was refreshed.
    pub fn update(&mut self) -> bool {
        let now = Instant::now();
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
            return true;
        }

        false
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Measured frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-rate tick scheduler.
///
/// Each tick's deadline is measured from the moment that tick began. A tick
/// that overruns its budget makes the next one due immediately; missed
/// ticks are never made up.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    budget: Duration,
    next: Instant,
}

impl FrameLimiter {
    /// Create a limiter whose first tick is due immediately.
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            next: Instant::now(),
        }
    }

    /// Earliest moment the next tick may start.
    #[inline]
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Whether the next tick may start at `now`.
    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Mark the start of a tick at `now`.
    pub fn begin_tick(&mut self, now: Instant) {
        self.next = now + self.budget;
    }
}
