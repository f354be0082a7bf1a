use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use particle_animation::connections::connect;
use particle_animation::{DrawList, Particle, Pointer, Rgb, SimConfig, Vec2, World};

fn grid(count: usize) -> Vec<Particle> {
    let cols = 40;
    (0..count)
        .map(|i| {
            let x = (i % cols) as f32 * 20.0;
            let y = (i / cols) as f32 * 20.0;
            Particle::new(Vec2::new(x, y), Vec2::ZERO, 3, Rgb::WHITE, 100)
        })
        .collect()
}

fn bench_connect(c: &mut Criterion) {
    let mut group = c.benchmark_group("connect");
    for count in [100, 500, 1000] {
        let particles = grid(count);
        let mut list = DrawList::new();
        group.bench_with_input(BenchmarkId::from_parameter(count), &particles, |b, particles| {
            b.iter(|| {
                list.clear();
                black_box(connect(particles, 100.0, &mut list))
            })
        });
    }
    group.finish();
}

fn bench_world_tick(c: &mut Criterion) {
    let pointer = Pointer {
        position: Vec2::new(400.0, 300.0),
        pressed: true,
    };

    c.bench_function("world_tick_steady_state", |b| {
        let mut world = World::new(SimConfig::default().with_seed(1));
        let mut list = DrawList::new();
        // Fill up to the steady-state population of a held button
        for _ in 0..200 {
            world.tick(pointer, &mut list);
        }
        b.iter(|| black_box(world.tick(pointer, &mut list)))
    });
}

criterion_group!(benches, bench_connect, bench_world_tick);
criterion_main!(benches);
