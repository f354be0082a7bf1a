//! Particle emitters.
//!
//! Emitters decide where new particles appear each tick. They only produce
//! spawn positions; the particles themselves are created by the world so all
//! randomness flows through one generator.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Emitter::Cursor`] | Fixed burst around the pointer while a button is held |
//! | [`Emitter::Ambient`] | Occasional single spawn anywhere on the canvas |

use crate::config::SimConfig;
use crate::input::Pointer;
use glam::Vec2;
use rand::Rng;

/// Spawn source.
#[derive(Clone, Debug, PartialEq)]
pub enum Emitter {
    /// Spawn `count` particles per tick near the pointer while pressed.
    Cursor {
        /// Particles per tick.
        count: u32,
        /// Each coordinate is offset by `uniform(-spread, spread)`.
        spread: f32,
    },

    /// Spawn one particle at a random whole-pixel position with the given
    /// per-tick probability.
    Ambient {
        /// Probability per tick, `0.0..=1.0`.
        chance: f64,
        /// Canvas size; positions fall in `0..=width` × `0..=height`.
        bounds: (u32, u32),
    },
}

impl Emitter {
    /// The emitters described by `config`, in spawn order.
    pub fn from_config(config: &SimConfig) -> Vec<Emitter> {
        vec![
            Emitter::Cursor {
                count: config.cursor_burst,
                spread: config.cursor_spread,
            },
            Emitter::Ambient {
                chance: config.ambient_chance,
                bounds: (config.width, config.height),
            },
        ]
    }

    /// Append this tick's spawn positions to `out`.
    pub fn emit<R: Rng>(&self, pointer: Pointer, rng: &mut R, out: &mut Vec<Vec2>) {
        match *self {
            Emitter::Cursor { count, spread } => {
                if !pointer.pressed {
                    return;
                }
                for _ in 0..count {
                    let offset = Vec2::new(
                        rng.gen_range(-spread..=spread),
                        rng.gen_range(-spread..=spread),
                    );
                    out.push(pointer.position + offset);
                }
            }
            Emitter::Ambient { chance, bounds } => {
                if rng.gen_bool(chance.clamp(0.0, 1.0)) {
                    out.push(Vec2::new(
                        rng.gen_range(0..=bounds.0) as f32,
                        rng.gen_range(0..=bounds.1) as f32,
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_cursor_idle_when_released() {
        let emitter = Emitter::Cursor { count: 5, spread: 10.0 };
        let mut out = Vec::new();
        let pointer = Pointer {
            position: Vec2::new(400.0, 300.0),
            pressed: false,
        };
        emitter.emit(pointer, &mut SmallRng::seed_from_u64(1), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_cursor_burst_jitter() {
        let emitter = Emitter::Cursor { count: 5, spread: 10.0 };
        let mut rng = SmallRng::seed_from_u64(2);
        let pointer = Pointer {
            position: Vec2::new(400.0, 300.0),
            pressed: true,
        };

        for _ in 0..100 {
            let mut out = Vec::new();
            emitter.emit(pointer, &mut rng, &mut out);
            assert_eq!(out.len(), 5);
            for p in out {
                assert!((p.x - 400.0).abs() <= 10.0);
                assert!((p.y - 300.0).abs() <= 10.0);
            }
        }
    }

    #[test]
    fn test_ambient_never_and_always() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut out = Vec::new();

        let never = Emitter::Ambient { chance: 0.0, bounds: (800, 600) };
        for _ in 0..100 {
            never.emit(Pointer::default(), &mut rng, &mut out);
        }
        assert!(out.is_empty());

        let always = Emitter::Ambient { chance: 1.0, bounds: (800, 600) };
        for _ in 0..100 {
            always.emit(Pointer::default(), &mut rng, &mut out);
        }
        assert_eq!(out.len(), 100);
        for p in out {
            assert!((0.0..=800.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
            assert_eq!(p.x.fract(), 0.0);
            assert_eq!(p.y.fract(), 0.0);
        }
    }

    #[test]
    fn test_from_config_order() {
        let emitters = Emitter::from_config(&SimConfig::default());
        assert!(matches!(emitters[0], Emitter::Cursor { count: 5, .. }));
        assert!(matches!(emitters[1], Emitter::Ambient { bounds: (800, 600), .. }));
    }
}
