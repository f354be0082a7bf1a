//! Simulation parameters.
//!
//! Every tunable in the animation lives in [`SimConfig`]. The [`Default`]
//! value is the canonical parameter set; the `with_*` builders exist so
//! tests and benches can pin a seed or silence ambient spawning.
//!
//! ```ignore
//! let config = SimConfig::default()
//!     .with_seed(7)
//!     .with_ambient_chance(0.0);
//! ```

use glam::Vec2;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Canvas width in pixels.
pub const WIDTH: u32 = 800;
/// Canvas height in pixels.
pub const HEIGHT: u32 = 600;
/// Window title.
pub const TITLE: &str = "Particle Animation";

/// Physics, spawning and rendering parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
    /// Target tick rate in Hz.
    pub target_fps: u32,

    /// Downward acceleration added to `velocity.y` each tick.
    pub gravity: f32,
    /// Per-axis velocity jitter bound; each component gets `uniform(-j, j)`.
    pub jitter: f32,
    /// Velocity multiplier applied each tick.
    pub damping: f32,
    /// Velocity multiplier applied on a wall hit (sign flips).
    pub restitution: f32,
    /// Chance of an extra upward kick when a particle hits the floor.
    pub floor_kick_chance: f64,
    /// Magnitude range of the floor kick.
    pub floor_kick: RangeInclusive<f32>,

    /// Particles spawned per tick while a mouse button is held.
    pub cursor_burst: u32,
    /// Half-width of the square around the pointer that cursor spawns land in.
    pub cursor_spread: f32,
    /// Chance per tick of one ambient spawn.
    pub ambient_chance: f64,

    /// Particle radius range.
    pub size: RangeInclusive<u32>,
    /// Per-channel colour range.
    pub channel: RangeInclusive<u8>,
    /// Lifetime range in ticks.
    pub lifetime: RangeInclusive<u32>,
    /// Initial speed range; heading is uniform over a full turn.
    pub initial_speed: RangeInclusive<f32>,

    /// Particles closer than this are joined by a line.
    pub connection_radius: f32,

    /// Seed for the simulation RNG. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            title: TITLE.to_string(),
            target_fps: 60,

            gravity: 0.03,
            jitter: 0.1,
            damping: 0.99,
            restitution: 0.8,
            floor_kick_chance: 0.5,
            floor_kick: 1.0..=3.0,

            cursor_burst: 5,
            cursor_spread: 10.0,
            ambient_chance: 0.1,

            size: 2..=5,
            channel: 50..=255,
            lifetime: 50..=200,
            initial_speed: 0.2..=2.0,

            connection_radius: 100.0,

            seed: None,
        }
    }
}

impl SimConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the per-tick ambient spawn chance (clamped to `0.0..=1.0`).
    pub fn with_ambient_chance(mut self, chance: f64) -> Self {
        self.ambient_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Set the target tick rate (at least 1 Hz).
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps.max(1);
        self
    }

    /// Canvas size as a vector.
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Time budget of one tick.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }
}
