//! Benchmark for the collision resolver and the frame loop.
//!
//! TARGET: one physics step in well under a microsecond, one full frame
//! (movement, physics, camera) far below the 16.6ms budget
//!
//! Run with: cargo bench --package blockfall --bench physics_benchmark

use blockfall::core::{BlockType, Tile, TileCoord, TileStore};
use blockfall::physics::{self, Body, PhysicsConfig, StepInput, DEFAULT_LIVES};
use blockfall::{FrameInput, GameConfig, GameLoop, MoveIntent};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_step(c: &mut Criterion) {
    let store: TileStore = (-100..=100)
        .map(|x| Tile::new(TileCoord::new(x, 10), BlockType::Dirt))
        .collect();
    let config = PhysicsConfig::default();

    c.bench_function("physics_step_resting", |b| {
        let mut body = Body::new(0.0, 288.0, &config, DEFAULT_LIVES);
        b.iter(|| black_box(physics::step(&mut body, &store, StepInput::default(), &config)));
    });

    c.bench_function("physics_step_walking", |b| {
        b.iter(|| {
            let mut body = Body::new(0.0, 288.0, &config, DEFAULT_LIVES);
            for _ in 0..60 {
                physics::step(&mut body, &store, StepInput { vx: 3.0, jump: false }, &config);
            }
            black_box(body)
        });
    });
}

fn benchmark_frame(c: &mut Criterion) {
    let config = GameConfig {
        seed: Some(42),
        ..GameConfig::default()
    };
    let mut game = GameLoop::generate(&config);
    let input = FrameInput {
        movement: MoveIntent {
            right: true,
            ..MoveIntent::default()
        },
        ..FrameInput::default()
    };

    c.bench_function("game_loop_frame", |b| {
        b.iter(|| black_box(game.step(&input)));
    });

    c.bench_function("view_window_tiles", |b| {
        b.iter(|| black_box(game.view_window().visible_tiles(game.store()).count()));
    });
}

criterion_group!(benches, benchmark_step, benchmark_frame);
criterion_main!(benches);
