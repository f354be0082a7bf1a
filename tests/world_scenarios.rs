//! End-to-end ticks of a headless world.

use particle_animation::{DrawList, Particle, Pointer, Rgb, SimConfig, Vec2, World};

fn quiet_world(seed: u64) -> World {
    World::new(SimConfig::default().with_seed(seed).with_ambient_chance(0.0))
}

fn pressed_at(x: f32, y: f32) -> Pointer {
    Pointer {
        position: Vec2::new(x, y),
        pressed: true,
    }
}

#[test]
fn test_pressed_spawn_lands_within_spread() {
    for seed in 0..20 {
        let mut world = quiet_world(seed);

        assert_eq!(world.spawn(pressed_at(400.0, 300.0)), 5);
        assert_eq!(world.len(), 5);

        for p in world.particles() {
            assert!((p.position.x - 400.0).abs() <= 10.0, "x = {}", p.position.x);
            assert!((p.position.y - 300.0).abs() <= 10.0, "y = {}", p.position.y);
            assert!((50..=200).contains(&p.life()));
            assert_eq!(p.life(), p.max_life());
            assert!((2..=5).contains(&p.size()));
        }
    }
}

#[test]
fn test_pressed_tick_spawns_burst_near_cursor() {
    for seed in 0..20 {
        let mut world = quiet_world(seed);
        let mut list = DrawList::new();

        let stats = world.tick(pressed_at(400.0, 300.0), &mut list);

        assert_eq!(stats.spawned, 5);
        assert_eq!(stats.culled, 0);
        assert_eq!(world.len(), 5);
        assert_eq!(list.circles().count(), 5);

        for p in world.particles() {
            // One update has run: velocity is at most 2.0 plus jitter and gravity
            assert!((p.position.x - 400.0).abs() <= 10.0 + 2.2, "x = {}", p.position.x);
            assert!((p.position.y - 300.0).abs() <= 10.0 + 2.2, "y = {}", p.position.y);
            assert!((50..=200).contains(&p.max_life()));
            assert_eq!(p.life(), p.max_life() - 1);
            assert!((2..=5).contains(&p.size()));
        }
    }
}

#[test]
fn test_idle_pointer_spawns_nothing() {
    let mut world = quiet_world(3);
    let mut list = DrawList::new();
    let idle = Pointer {
        position: Vec2::new(400.0, 300.0),
        pressed: false,
    };

    for _ in 0..100 {
        let stats = world.tick(idle, &mut list);
        assert_eq!(stats.spawned, 0);
    }
    assert!(world.is_empty());
    assert!(list.is_empty());
}

#[test]
fn test_last_life_drawn_once_then_culled() {
    let mut world = quiet_world(5);
    let mut list = DrawList::new();
    world.insert(Particle::new(
        Vec2::new(100.0, 100.0),
        Vec2::ZERO,
        3,
        Rgb::new(200, 100, 50),
        1,
    ));

    let first = world.tick(Pointer::default(), &mut list);
    assert_eq!(first.culled, 0);
    assert_eq!(first.alive, 1);
    assert_eq!(list.circles().count(), 1);
    assert_eq!(world.particles()[0].life(), 0);

    let second = world.tick(Pointer::default(), &mut list);
    assert_eq!(second.culled, 1);
    assert_eq!(second.alive, 0);
    assert!(list.discs().is_empty());
    assert!(world.is_empty());
}

#[test]
fn test_held_button_keeps_emitting() {
    let mut world = quiet_world(11);
    let mut list = DrawList::new();

    for tick in 1..=10 {
        world.tick(pressed_at(200.0, 200.0), &mut list);
        // Nothing can expire before 50 ticks
        assert_eq!(world.len(), tick * 5);
    }
}

#[test]
fn test_burst_particles_are_connected() {
    let mut world = quiet_world(8);
    let mut list = DrawList::new();

    let stats = world.tick(pressed_at(400.0, 300.0), &mut list);

    // Five particles within a few dozen pixels of each other: every pair
    assert_eq!(stats.lines, 10);
    assert_eq!(list.line_count(), 10);
}

#[test]
fn test_population_drains_after_release() {
    let mut world = quiet_world(21);
    let mut list = DrawList::new();

    world.tick(pressed_at(400.0, 300.0), &mut list);
    for _ in 0..201 {
        world.tick(Pointer::default(), &mut list);
    }

    assert!(world.is_empty());
}
