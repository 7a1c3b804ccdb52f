//! # Collision Integration Tests
//!
//! The resolver against generated and hand-built worlds: resting is stable,
//! bodies never end a frame inside solid tiles, and fall damage triggers
//! strictly above the threshold.
//!
//! Run with: cargo test --package blockfall --test collision_test

use blockfall::core::{BlockType, Rect, Tile, TileCoord, TileStore};
use blockfall::physics::{self, Body, PhysicsConfig, StepInput, DEFAULT_LIVES};
use blockfall::procedural::{TerrainConfig, TerrainGenerator, WorldSeed};
use proptest::prelude::*;

fn floor(row: i32, from: i32, to: i32) -> TileStore {
    (from..=to)
        .map(|x| Tile::new(TileCoord::new(x, row), BlockType::Dirt))
        .collect()
}

/// A falling body five pixels above a floor at row 10, about to land.
fn about_to_land(fall_distance: f32) -> Body {
    let config = PhysicsConfig::default();
    let mut body = Body::new(70.0, 320.0 - 32.0 - 5.0, &config, DEFAULT_LIVES);
    body.velocity[1] = config.max_fall_speed - config.gravity;
    body.falling = true;
    body.fall_distance = fall_distance;
    body
}

/// Test: a fall of exactly the threshold costs nothing.
#[test]
fn test_fall_at_threshold_is_safe() {
    let store = floor(10, 0, 10);
    let config = PhysicsConfig::default();
    let mut body = about_to_land(7.0);

    let outcome = physics::step(&mut body, &store, StepInput::default(), &config);
    assert!(outcome.landed);
    assert!(outcome.fall_damage.is_none());
    assert_eq!(body.lives, DEFAULT_LIVES);
    assert!((body.rect.bottom() - 320.0).abs() < f32::EPSILON);
}

/// Test: a fall just above the threshold costs exactly one life.
#[test]
fn test_fall_above_threshold_costs_one_life() {
    let store = floor(10, 0, 10);
    let config = PhysicsConfig::default();
    let mut body = about_to_land(7.01);

    let outcome = physics::step(&mut body, &store, StepInput::default(), &config);
    let damage = outcome.fall_damage.expect("fall damage");
    assert_eq!(damage.lives_remaining, DEFAULT_LIVES - 1);
    assert!(damage.distance > 7.0);
    assert_eq!(body.lives, DEFAULT_LIVES - 1);
    assert!((body.fall_distance).abs() < f32::EPSILON);
    assert!(!body.falling);
}

/// Test: a long free fall accumulates distance and lands with damage.
#[test]
fn test_free_fall_accumulates_distance() {
    let store = floor(30, -2, 2);
    let config = PhysicsConfig::default();
    let mut body = Body::new(0.0, 32.0, &config, 2);

    let mut damage = None;
    for _ in 0..200 {
        let outcome = physics::step(&mut body, &store, StepInput::default(), &config);
        if outcome.landed {
            damage = outcome.fall_damage;
            break;
        }
    }
    let damage = damage.expect("landed with damage");
    assert!(damage.distance > 25.0);
    assert_eq!(body.lives, 1);
}

/// Test: a body with no lives left lands without reporting damage.
#[test]
fn test_dead_body_takes_no_damage() {
    let store = floor(10, 0, 10);
    let config = PhysicsConfig::default();
    let mut body = about_to_land(50.0);
    body.lives = 0;

    let outcome = physics::step(&mut body, &store, StepInput::default(), &config);
    assert!(outcome.landed);
    assert!(outcome.fall_damage.is_none());
    assert_eq!(body.lives, 0);
    assert!(!body.is_alive());
}

/// Test: a body dropped onto generated terrain settles and then stays put.
#[test]
fn test_settles_on_generated_terrain() {
    let terrain = TerrainConfig {
        width: 40,
        height: 80,
        ..TerrainConfig::default()
    };
    let world = TerrainGenerator::new(terrain, WorldSeed::new(11)).generate();
    let config = PhysicsConfig::default();
    let top = world.store.column_top_solid(0).expect("column 0 has ground");
    let mut body = Body::new(0.0, (top * 32) as f32 - 96.0, &config, DEFAULT_LIVES);

    for _ in 0..120 {
        physics::step(&mut body, &world.store, StepInput::default(), &config);
    }
    assert!(body.grounded);
    let rest = body.rect;

    for _ in 0..60 {
        let outcome = physics::step(&mut body, &world.store, StepInput::default(), &config);
        assert!(outcome.grounded);
    }
    assert_eq!(body.rect, rest);
    assert_eq!(body.lives, DEFAULT_LIVES);
}

proptest! {
    /// Test: whatever the horizontal input, a walking body on a flat floor
    /// with a wall never ends a frame overlapping solid tiles.
    #[test]
    fn prop_no_overlap_after_step(inputs in proptest::collection::vec(-7.0f32..7.0, 1..120)) {
        let mut store = floor(10, -20, 20);
        store.insert(Tile::new(TileCoord::new(5, 9), BlockType::Granite));
        store.insert(Tile::new(TileCoord::new(-5, 9), BlockType::Granite));
        let config = PhysicsConfig::default();
        let mut body = Body::new(0.0, 288.0, &config, DEFAULT_LIVES);

        for vx in inputs {
            physics::step(&mut body, &store, StepInput { vx, jump: false }, &config);
            let inside = store.any_solid_overlapping(&body.rect, config.tile_size);
            prop_assert!(!inside, "body {:?} overlaps a solid tile", body.rect);
        }
    }

    /// Test: resolving a resting body is idempotent.
    #[test]
    fn prop_rest_is_idempotent(x in -500.0f32..500.0) {
        let store = floor(10, -30, 30);
        let config = PhysicsConfig::default();
        let mut body = Body::new(x, 288.0, &config, DEFAULT_LIVES);
        physics::step(&mut body, &store, StepInput::default(), &config);
        let first: Rect = body.rect;
        physics::step(&mut body, &store, StepInput::default(), &config);
        prop_assert_eq!(body.rect, first);
        prop_assert!(body.grounded);
    }
}
