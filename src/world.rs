//! Simulation state and the per-tick step.
//!
//! [`World`] owns the particle collection, the emitters and the single
//! random generator that every spawn and jitter draws from. Seeding the
//! generator through [`SimConfig::with_seed`] makes a run replayable.
//!
//! One call to [`World::tick`] performs, in order:
//!
//! 1. emitter spawns (cursor burst, then ambient)
//! 2. cull of expired particles
//! 3. update then draw of every survivor
//! 4. connection lines between the survivors

use crate::config::SimConfig;
use crate::connections;
use crate::draw::DrawList;
use crate::emitter::Emitter;
use crate::input::Pointer;
use crate::particle::Particle;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Counters describing one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Particles created this tick.
    pub spawned: usize,
    /// Particles removed by the cull.
    pub culled: usize,
    /// Particles updated and drawn.
    pub alive: usize,
    /// Connection lines drawn.
    pub lines: usize,
}

/// The particle collection and everything needed to advance it.
pub struct World {
    particles: Vec<Particle>,
    emitters: Vec<Emitter>,
    rng: SmallRng,
    config: SimConfig,
    spawn_points: Vec<Vec2>,
}

impl World {
    /// Create an empty world.
    pub fn new(config: SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        Self {
            particles: Vec::new(),
            emitters: Emitter::from_config(&config),
            rng,
            config,
            spawn_points: Vec::new(),
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Live particles in draw order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles in the collection.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Add a particle directly, bypassing the emitters.
    pub fn insert(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Create a random particle at `position`.
    pub fn spawn_at(&mut self, position: Vec2) {
        let particle = Particle::spawn(position, &self.config, &mut self.rng);
        self.particles.push(particle);
    }

    /// Run every emitter for this tick. Returns the number of particles added.
    pub fn spawn(&mut self, pointer: Pointer) -> usize {
        self.spawn_points.clear();
        for emitter in &self.emitters {
            emitter.emit(pointer, &mut self.rng, &mut self.spawn_points);
        }

        let points = std::mem::take(&mut self.spawn_points);
        for &position in &points {
            self.spawn_at(position);
        }
        let count = points.len();
        self.spawn_points = points;
        count
    }

    /// Remove expired particles. Returns the number removed.
    ///
    /// Survivors keep their relative order.
    pub fn cull(&mut self) -> usize {
        let retained: Vec<usize> = self
            .particles
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_alive())
            .map(|(i, _)| i)
            .collect();

        let removed = self.particles.len() - retained.len();
        if removed > 0 {
            let previous = std::mem::take(&mut self.particles);
            self.particles = retained.into_iter().map(|i| previous[i]).collect();
        }
        removed
    }

    /// Advance one tick and record the frame into `list`.
    ///
    /// `list` is cleared first; the caller presents whatever it holds
    /// afterwards.
    pub fn tick(&mut self, pointer: Pointer, list: &mut DrawList) -> TickStats {
        let spawned = self.spawn(pointer);

        list.clear();

        let culled = self.cull();

        for particle in &mut self.particles {
            particle.update(&self.config, &mut self.rng);
            particle.draw(list);
        }

        let lines = connections::connect(&self.particles, self.config.connection_radius, list);

        TickStats {
            spawned,
            culled,
            alive: self.particles.len(),
            lines,
        }
    }
}
