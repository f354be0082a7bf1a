//! # Particle Animation
//!
//! A mouse-driven 2D particle toy. Holding any mouse button over the
//! 800×600 canvas emits a burst of coloured particles around the cursor,
//! and a trickle of ambient particles appears at random spots on its own.
//! Particles fall under gravity, jitter, bounce off the walls, fade out
//! over their lifetime and are joined by faint lines when they come close.
//!
//! ## Quick Start
//!
//! ```ignore
//! use particle_animation::prelude::*;
//!
//! fn main() -> Result<(), SimulationError> {
//!     Simulation::new().run()
//! }
//! ```
//!
//! ## Headless use
//!
//! The simulation itself does not need a window. [`World`] advances the
//! particles one tick at a time and records what to draw into a
//! [`DrawList`]:
//!
//! ```
//! use particle_animation::{DrawList, Pointer, SimConfig, Vec2, World};
//!
//! let mut world = World::new(SimConfig::default().with_seed(1).with_ambient_chance(0.0));
//! let mut list = DrawList::new();
//!
//! let pointer = Pointer { position: Vec2::new(400.0, 300.0), pressed: true };
//! let stats = world.tick(pointer, &mut list);
//!
//! assert_eq!(stats.spawned, 5);
//! assert_eq!(list.circles().count(), 5);
//! ```
//!
//! ## Tick order
//!
//! Each tick spawns, culls expired particles, updates and draws the rest,
//! then draws connection lines. See [`World::tick`].
//!
//! ## Logging
//!
//! Diagnostics go through the `log` facade. The binary installs
//! `env_logger` at `info`; set `RUST_LOG=debug` for a periodic FPS line.

pub mod color;
pub mod config;
pub mod connections;
pub mod draw;
mod emitter;
pub mod error;
mod gpu;
pub mod input;
pub mod particle;
mod simulation;
pub mod time;
pub mod world;

pub use color::Rgb;
pub use config::SimConfig;
pub use draw::{Disc, DiscKind, DiscRun, DrawList, LineVertex};
pub use emitter::Emitter;
pub use error::{GpuError, SimulationError};
pub use glam::Vec2;
pub use input::{Input, Pointer};
pub use particle::Particle;
pub use simulation::{hud_text, Simulation};
pub use time::{FrameLimiter, Time};
pub use world::{TickStats, World};

/// Convenient re-exports.
pub mod prelude {
    pub use crate::config::SimConfig;
    pub use crate::error::SimulationError;
    pub use crate::input::Pointer;
    pub use crate::simulation::Simulation;
    pub use crate::world::World;
    pub use crate::Vec2;
}
