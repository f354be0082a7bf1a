//! The particle: a point mass with a countdown lifespan.
//!
//! A particle moves with constant downward gravity, random jitter and
//! velocity damping, bounces off the canvas edges with some energy loss, and
//! gets an occasional upward kick when it lands on the floor. It dies when
//! its life counter reaches zero.
//!
//! # Per-tick update
//!
//! | Step | Effect |
//! |------|--------|
//! | integrate | `position += velocity` |
//! | gravity | `velocity.y += gravity` |
//! | jitter | each component `+= uniform(-jitter, jitter)` |
//! | damping | `velocity *= damping` |
//! | age | `life -= 1` |
//! | walls | reflect `velocity.x` outside `0..=width` |
//! | floor / ceiling | reflect `velocity.y` outside `0..=height`, clamp and maybe kick at the floor |

use crate::color::Rgb;
use crate::config::SimConfig;
use crate::draw::DrawList;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// A single simulated particle.
///
/// `size`, `color` and `max_life` are fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in canvas pixels.
    pub position: Vec2,
    /// Velocity in pixels per tick.
    pub velocity: Vec2,
    size: u32,
    color: Rgb,
    life: u32,
    max_life: u32,
}

impl Particle {
    /// Create a particle with explicit attributes. `max_life` is set to `life`.
    pub fn new(position: Vec2, velocity: Vec2, size: u32, color: Rgb, life: u32) -> Self {
        Self {
            position,
            velocity,
            size,
            color,
            life,
            max_life: life,
        }
    }

    /// Create a particle at `position` with random size, colour, lifespan and
    /// heading drawn from the ranges in `config`.
    pub fn spawn<R: Rng>(position: Vec2, config: &SimConfig, rng: &mut R) -> Self {
        let size = rng.gen_range(config.size.clone());
        let color = Rgb::new(
            rng.gen_range(config.channel.clone()),
            rng.gen_range(config.channel.clone()),
            rng.gen_range(config.channel.clone()),
        );
        let speed = rng.gen_range(config.initial_speed.clone());
        let heading = rng.gen_range(0.0..TAU);
        let life = rng.gen_range(config.lifetime.clone());

        Self::new(position, Vec2::from_angle(heading) * speed, size, color, life)
    }

    /// Radius in pixels.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Ticks left to live.
    #[inline]
    pub fn life(&self) -> u32 {
        self.life
    }

    /// Lifespan the particle was created with.
    #[inline]
    pub fn max_life(&self) -> u32 {
        self.max_life
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Fade factor in `0..=255`, proportional to remaining life.
    pub fn fade_alpha(&self) -> u8 {
        if self.max_life == 0 {
            return 0;
        }
        (255 * self.life.min(self.max_life) / self.max_life) as u8
    }

    /// Advance one tick.
    pub fn update<R: Rng>(&mut self, config: &SimConfig, rng: &mut R) {
        let bounds = config.bounds();

        self.position += self.velocity;

        self.velocity.y += config.gravity;

        self.velocity.x += rng.gen_range(-config.jitter..=config.jitter);
        self.velocity.y += rng.gen_range(-config.jitter..=config.jitter);

        self.velocity *= config.damping;

        self.life = self.life.saturating_sub(1);

        // Walls: reflect only, the particle may sit outside for a frame
        if self.position.x < 0.0 || self.position.x > bounds.x {
            self.velocity.x *= -config.restitution;
        }

        if self.position.y < 0.0 || self.position.y > bounds.y {
            self.velocity.y *= -config.restitution;
            if self.position.y > bounds.y {
                self.position.y = bounds.y;
                if rng.gen_bool(config.floor_kick_chance) {
                    self.velocity.y -= rng.gen_range(config.floor_kick.clone());
                }
            }
        }
    }

    /// Record this particle's disc, and its glow if it is larger than the
    /// minimum size.
    ///
    /// The disc is always opaque; only the glow carries the fade.
    pub fn draw(&self, list: &mut DrawList) {
        let center = self.position.round();
        list.circle(center, self.size as f32, self.color.opaque());

        if self.size > 2 {
            let glow_alpha = self.fade_alpha() / 3;
            list.glow(
                center,
                (self.size * 2) as f32,
                self.color.with_alpha(glow_alpha),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use crate::draw::DiscKind;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5eed)
    }

    fn particle_at(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::new(vx, vy), 3, Rgb::new(200, 100, 50), 100)
    }

    #[test]
    fn test_update_decrements_life_by_one() {
        let config = SimConfig::default();
        let mut rng = rng();
        let mut p = particle_at(400.0, 300.0, 0.0, 0.0);

        for expected in (90..100).rev() {
            p.update(&config, &mut rng);
            assert_eq!(p.life(), expected);
        }
        assert_eq!(p.max_life(), 100);
    }

    #[test]
    fn test_last_tick_kills() {
        let config = SimConfig::default();
        let mut p = particle_at(400.0, 300.0, 0.0, 0.0);
        p.life = 1;
        p.update(&config, &mut rng());
        assert_eq!(p.life(), 0);
        assert!(!p.is_alive());
    }

    #[test]
    fn test_spawn_ranges() {
        let config = SimConfig::default();
        let mut rng = rng();

        for _ in 0..500 {
            let p = Particle::spawn(Vec2::new(10.0, 20.0), &config, &mut rng);
            assert!((2..=5).contains(&p.size()));
            assert!((50..=200).contains(&p.life()));
            assert_eq!(p.life(), p.max_life());
            let c = p.color();
            for channel in [c.r, c.g, c.b] {
                assert!(channel >= 50);
            }
            let speed = p.velocity.length();
            assert!(speed >= 0.2 - 1e-4 && speed <= 2.0 + 1e-4, "speed {speed}");
            assert_eq!(p.position, Vec2::new(10.0, 20.0));
        }
    }

    #[test]
    fn test_size_and_max_life_fixed() {
        let config = SimConfig::default();
        let mut rng = rng();
        let mut p = Particle::spawn(Vec2::new(400.0, 300.0), &config, &mut rng);
        let (size, max_life, color) = (p.size(), p.max_life(), p.color());

        while p.is_alive() {
            p.update(&config, &mut rng);
            assert_eq!(p.size(), size);
            assert_eq!(p.max_life(), max_life);
            assert_eq!(p.color(), color);
        }
    }

    #[test]
    fn test_damping_bounds_speed_without_collision() {
        let config = SimConfig::default();
        let mut rng = rng();
        let bound = std::f32::consts::SQRT_2 * config.jitter + config.gravity;

        for i in 0..200 {
            let angle = i as f32 * 0.1;
            let mut p = particle_at(400.0, 300.0, angle.cos() * 3.0, angle.sin() * 3.0);
            let before = p.velocity.length();
            p.update(&config, &mut rng);
            assert!(p.velocity.length() <= before + bound + 1e-5);
        }
    }

    #[test]
    fn test_speed_decays_over_time() {
        // Gravity off so only damping and jitter act
        let config = SimConfig {
            gravity: 0.0,
            ..SimConfig::default()
        };
        let mut rng = rng();
        let mut p = particle_at(400.0, 300.0, 5.0, 0.0);
        p.life = 1000;
        for _ in 0..400 {
            p.update(&config, &mut rng);
            p.position = Vec2::new(400.0, 300.0);
        }
        assert!(p.velocity.length() < 1.5);
    }

    #[test]
    fn test_right_wall_reflects() {
        let config = SimConfig::default();
        let mut p = particle_at(810.0, 300.0, 1.0, 0.0);
        p.update(&config, &mut rng());

        assert!(p.velocity.x < 0.0);
        // 0.8 * 0.99 * (1 +- 0.1)
        let magnitude = p.velocity.x.abs();
        assert!(magnitude >= 0.8 * 0.99 * 0.9 - 1e-5);
        assert!(magnitude <= 0.8 * 0.99 * 1.1 + 1e-5);
        // Position is not clamped on the walls
        assert_eq!(p.position.x, 811.0);
    }

    #[test]
    fn test_left_wall_reflects() {
        let config = SimConfig::default();
        let mut p = particle_at(-5.0, 300.0, -1.0, 0.0);
        p.update(&config, &mut rng());
        assert!(p.velocity.x > 0.0);
        assert_eq!(p.position.x, -6.0);
    }

    #[test]
    fn test_floor_clamps() {
        let config = SimConfig::default();
        let mut rng = rng();
        for _ in 0..50 {
            let mut p = particle_at(400.0, 599.5, 0.0, 2.0);
            p.update(&config, &mut rng);
            assert_eq!(p.position.y, 600.0);
            // Reflected upward, possibly kicked further
            assert!(p.velocity.y < 0.0);
        }
    }

    #[test]
    fn test_floor_kick_happens_sometimes() {
        let config = SimConfig::default();
        let mut rng = rng();
        let mut kicked = 0;
        for _ in 0..200 {
            let mut p = particle_at(400.0, 599.5, 0.0, 2.0);
            p.update(&config, &mut rng);
            // Without a kick |vy| is at most 0.8 * 0.99 * 2.13
            if p.velocity.y < -0.8 * 0.99 * 2.13 - 1e-4 {
                kicked += 1;
            }
        }
        assert!(kicked > 50 && kicked < 150, "kicked {kicked} of 200");
    }

    #[test]
    fn test_ceiling_reflects_without_clamp() {
        let config = SimConfig::default();
        let mut p = particle_at(400.0, 1.0, 0.0, -3.0);
        p.update(&config, &mut rng());
        assert_eq!(p.position.y, -2.0);
        assert!(p.velocity.y > 0.0);
    }

    #[test]
    fn test_fade_alpha() {
        let mut p = particle_at(0.0, 0.0, 0.0, 0.0);
        assert_eq!(p.fade_alpha(), 255);
        p.life = 50;
        assert_eq!(p.fade_alpha(), 127);
        p.life = 0;
        assert_eq!(p.fade_alpha(), 0);
    }

    #[test]
    fn test_draw_small_particle_has_no_glow() {
        let p = Particle::new(Vec2::new(10.4, 20.6), Vec2::ZERO, 2, Rgb::WHITE, 10);
        let mut list = DrawList::new();
        p.draw(&mut list);

        assert_eq!(list.discs().len(), 1);
        assert_eq!(list.glows().count(), 0);
        assert_eq!(list.discs()[0].center, [10.0, 21.0]);
        assert_eq!(list.discs()[0].radius, 2.0);
    }

    #[test]
    fn test_draw_glow() {
        let mut p = Particle::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 4, Rgb::new(255, 0, 0), 100);
        p.life = 50;
        let mut list = DrawList::new();
        p.draw(&mut list);

        // Disc first, then its glow
        let kinds: Vec<DiscKind> = list.kinds().collect();
        assert_eq!(kinds, vec![DiscKind::Solid, DiscKind::Glow]);
        let disc = list.discs()[0];
        let glow = list.discs()[1];
        // Main disc ignores the fade
        assert_eq!(disc.color[3], 1.0);
        assert_eq!(glow.radius, 8.0);
        assert_eq!(glow.center, disc.center);
        // 255 * 50 / 100 = 127, / 3 = 42
        assert!((glow.color[3] - 42.0 / 255.0).abs() < 1e-6);
        assert_eq!(&glow.color[..3], &[1.0, 0.0, 0.0]);
    }
}
