//! # BLOCKFALL Headless Simulation
//!
//! Generates a world, then drives the frame loop with a scripted player:
//! walk, sprint, jump, dig down with the shovel and place the dug block
//! back. No window, no renderer. Everything is reported through `tracing`.
//!
//! ```bash
//! # Default configuration, info logs
//! ./blockfall_sim
//!
//! # Custom configuration, debug logs
//! RUST_LOG=debug ./blockfall_sim blockfall.toml
//! ```

use std::error::Error;

use blockfall::core::TileCoord;
use blockfall::procedural::{GenerationTask, TerrainGenerator};
use blockfall::{Click, FrameInput, GameConfig, GameEvent, GameLoop, MouseButton, MoveIntent};
use tracing_subscriber::EnvFilter;

/// Frames in the scripted run.
const SCRIPT_FRAMES: u64 = 600;

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let seed = config.world_seed();
    tracing::info!(seed = seed.value(), width = config.terrain.width, height = config.terrain.height, "generating world");

    let world = GenerationTask::spawn(TerrainGenerator::new(config.terrain.clone(), seed))?.wait()?;
    let mut game = GameLoop::new(&config, world);
    let events = game.events();

    for frame in 0..SCRIPT_FRAMES {
        let input = scripted_input(&game, frame);
        let report = game.step(&input);

        for edit in &report.edits {
            tracing::debug!(frame, ?edit, "edit");
        }
        if game.is_over() {
            tracing::info!(frame, "game over");
            break;
        }
    }

    let mut broken = 0;
    let mut placed = 0;
    let mut falls = 0;
    for event in events.drain() {
        match event {
            GameEvent::BlockBroken { .. } | GameEvent::BlockCleared { .. } => broken += 1,
            GameEvent::BlockPlaced { .. } => placed += 1,
            GameEvent::FallDamage { .. } => falls += 1,
            GameEvent::PlayerDied { .. } => {}
        }
    }

    let stats = game.stats();
    let player = game.player();
    tracing::info!(
        frames = game.frame_count(),
        avg_frame_ms = stats.avg_frame_ms(),
        over_budget = stats.over_budget_ratio(),
        broken,
        placed,
        falls,
        lives = player.body.lives,
        blocks = player.inventory.blocks().len(),
        "simulation finished"
    );
    Ok(())
}

/// The scripted player for one frame.
fn scripted_input(game: &GameLoop, frame: u64) -> FrameInput {
    match frame {
        0..=119 => FrameInput {
            movement: MoveIntent {
                right: true,
                ..MoveIntent::default()
            },
            ..FrameInput::default()
        },
        120..=239 => FrameInput {
            movement: MoveIntent {
                right: true,
                sprint: true,
                jump: frame % 40 == 0,
                ..MoveIntent::default()
            },
            ..FrameInput::default()
        },
        // Shovel, then dig straight down every few frames.
        240..=419 => FrameInput {
            hotbar: Some(3),
            clicks: if frame % 20 == 0 {
                vec![click_at(game, 0, 1, MouseButton::Primary)]
            } else {
                Vec::new()
            },
            ..FrameInput::default()
        },
        // First block slot, then build a step to the left.
        420..=479 => FrameInput {
            hotbar: Some(4),
            clicks: if frame % 20 == 0 {
                vec![click_at(game, -1, 0, MouseButton::Secondary)]
            } else {
                Vec::new()
            },
            ..FrameInput::default()
        },
        _ => FrameInput {
            movement: MoveIntent {
                left: true,
                jump: frame % 30 == 0,
                ..MoveIntent::default()
            },
            ..FrameInput::default()
        },
    }
}

/// A click on the tile `(dx, dy)` away from the one under the player's feet.
fn click_at(game: &GameLoop, dx: i32, dy: i32, button: MouseButton) -> Click {
    let tile_size = game.tile_size();
    let body = &game.player().body.rect;
    let feet = TileCoord::from_pixel(body.center()[0], body.bottom() - 1.0, tile_size);
    let [px, py] = feet.offset(dx, dy).to_pixel(tile_size);
    let half = tile_size as f32 / 2.0;
    Click {
        screen_pos: game.camera().world_to_screen([px + half, py + half]),
        button,
    }
}
