//! # BLOCKFALL Game Loop
//!
//! One call to [`GameLoop::step`] is one frame:
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │ 1. MOVEMENT   held keys + stamina -> horizontal velocity            │
//! │ 2. PHYSICS    gravity, X then Y collision, fall tracking            │
//! │ 3. SELECTION  number key -> hotbar slot                             │
//! │ 4. EDITS      clicks -> break / place (camera from last frame)      │
//! │ 5. CAMERA     follow the body                                       │
//! │ 6. EVENTS     outcomes -> event bus                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The renderer reads [`GameLoop::view_window`] and the camera afterwards.
//! The loop is over once the player has no lives left.

use std::time::{Duration, Instant};

use blockfall_core::TileStore;
use blockfall_procedural::{Cloud, GeneratedWorld, TerrainGenerator};
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::events::{EventBus, EventReceiver, EventSender, GameEvent};
use crate::physics::{self, PhysicsConfig, StepOutcome};
use crate::player::{MoveIntent, Player};
use crate::view::{Camera, ViewConfig, ViewWindow};
use crate::world_edit::{BreakOutcome, Click, EditOutcome, PlaceOutcome, WorldEditor};

/// Target frame time for 60 FPS.
pub const TARGET_FRAME_TIME: Duration = Duration::from_micros(16_666);

/// Maximum allowed frame time before warning.
pub const MAX_FRAME_TIME: Duration = Duration::from_millis(33);

/// Configuration for the game loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameLoopConfig {
    /// Event channel capacity.
    pub event_capacity: usize,
    /// Warn about frames over budget.
    pub enable_timing_logs: bool,
}

impl Default for GameLoopConfig {
    fn default() -> Self {
        Self {
            event_capacity: 1024,
            enable_timing_logs: true,
        }
    }
}

/// Input gathered for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Held movement keys.
    pub movement: MoveIntent,
    /// Number key pressed this frame.
    pub hotbar: Option<u8>,
    /// Clicks this frame, in order.
    pub clicks: Vec<Click>,
}

/// Frame timing statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Total frame time in microseconds.
    pub total_us: u64,
    /// Physics step time in microseconds.
    pub physics_us: u64,
    /// Edit handling time in microseconds.
    pub edit_us: u64,
    /// Frame number.
    pub frame: u64,
    /// Events sent this frame.
    pub events_sent: u32,
}

/// Everything one frame produced.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    /// Physics result.
    pub step: StepOutcome,
    /// One entry per click.
    pub edits: Vec<EditOutcome>,
    /// Timing.
    pub stats: FrameStats,
}

/// The frame orchestrator. Owns the world and the player.
pub struct GameLoop {
    store: TileStore,
    clouds: Vec<Cloud>,
    player: Player,
    camera: Camera,
    editor: WorldEditor,
    physics: PhysicsConfig,
    view: ViewConfig,
    config: GameLoopConfig,
    bus: EventBus,
    events: EventSender,
    frame_count: u64,
    budget: FrameBudget,
}

impl GameLoop {
    /// Generates the world on this thread and builds the loop around it.
    #[must_use]
    pub fn generate(config: &GameConfig) -> Self {
        let world = TerrainGenerator::new(config.terrain.clone(), config.world_seed()).generate();
        Self::new(config, world)
    }

    /// Builds the loop around an already generated world.
    ///
    /// The player spawns standing on the top solid tile of column 0.
    #[must_use]
    pub fn new(config: &GameConfig, world: GeneratedWorld) -> Self {
        let physics = config.physics;
        let (x, y) = spawn_point(&world.store, &physics);
        let player = Player::spawn(x, y, config.player, &physics);

        let mut camera = Camera::new(config.view.viewport_width, config.view.viewport_height);
        camera.follow(&player.body.rect);

        let bus = EventBus::new(config.game_loop.event_capacity);
        let events = bus.sender();

        tracing::info!(x, y, tiles = world.store.len(), "player spawned");

        Self {
            store: world.store,
            clouds: world.clouds,
            player,
            camera,
            editor: WorldEditor::new(config.break_rules.clone(), config.reach, physics.tile_size),
            physics,
            view: config.view,
            config: config.game_loop.clone(),
            bus,
            events,
            frame_count: 0,
            budget: FrameBudget::default(),
        }
    }

    /// Runs one frame.
    pub fn step(&mut self, input: &FrameInput) -> FrameReport {
        let start = Instant::now();
        let mut events_sent = 0;

        let step_input = self.player.movement(input.movement);
        let physics_start = Instant::now();
        let was_alive = self.player.body.is_alive();
        let step = physics::step(&mut self.player.body, &self.store, step_input, &self.physics);
        let physics_us = elapsed_us(physics_start);

        if let Some(damage) = step.fall_damage {
            events_sent += u32::from(self.events.send(GameEvent::FallDamage {
                distance: damage.distance,
                lives_remaining: damage.lives_remaining,
            }));
            tracing::info!(distance = damage.distance, lives = damage.lives_remaining, "fall damage");
        }
        if was_alive && !self.player.body.is_alive() {
            events_sent += u32::from(self.events.send(GameEvent::PlayerDied {
                frame: self.frame_count,
            }));
            tracing::info!(frame = self.frame_count, "player died");
        }

        if let Some(key) = input.hotbar {
            self.player.inventory.select_hotbar(key);
        }

        let edit_start = Instant::now();
        let mut edits = Vec::with_capacity(input.clicks.len());
        for &click in &input.clicks {
            let edit = self.editor.handle_click(
                &mut self.store,
                &mut self.player.inventory,
                &self.player.body,
                &self.camera,
                click,
            );
            if let Some(event) = edit_event(&edit) {
                events_sent += u32::from(self.events.send(event));
            }
            edits.push(edit);
        }
        let edit_us = elapsed_us(edit_start);

        self.camera.follow(&self.player.body.rect);

        let stats = FrameStats {
            total_us: elapsed_us(start),
            physics_us,
            edit_us,
            frame: self.frame_count,
            events_sent,
        };
        self.end_frame(stats);

        FrameReport { step, edits, stats }
    }

    fn end_frame(&mut self, stats: FrameStats) {
        self.frame_count += 1;
        self.budget.record(&stats);

        if self.config.enable_timing_logs && stats.total_us > MAX_FRAME_TIME.as_micros() as u64 {
            tracing::warn!(
                frame = stats.frame,
                total_ms = stats.total_us as f64 / 1000.0,
                target_ms = TARGET_FRAME_TIME.as_micros() as f64 / 1000.0,
                "frame exceeded budget"
            );
        }
    }

    /// Returns true once the player has no lives left.
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        !self.player.body.is_alive()
    }

    /// The tiles the renderer should draw this frame.
    #[must_use]
    pub fn view_window(&self) -> ViewWindow {
        ViewWindow::around(
            self.player.body.center_tile(self.physics.tile_size),
            self.view.render_distance,
        )
    }

    /// The world.
    #[must_use]
    pub fn store(&self) -> &TileStore {
        &self.store
    }

    /// Decorative clouds.
    #[must_use]
    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    /// The player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The player, mutably.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Tile edge length in pixels.
    #[inline]
    #[must_use]
    pub fn tile_size(&self) -> u32 {
        self.physics.tile_size
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// A new receiver for the event bus.
    #[must_use]
    pub fn events(&self) -> EventReceiver {
        self.bus.receiver()
    }

    /// Returns the current frame count.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Frame-time totals so far.
    #[must_use]
    pub fn stats(&self) -> &FrameBudget {
        &self.budget
    }
}

/// Top-left pixel for a body standing on column 0, or the origin if the
/// column is empty.
fn spawn_point(store: &TileStore, physics: &PhysicsConfig) -> (f32, f32) {
    store.column_top_solid(0).map_or((0.0, 0.0), |row| {
        (0.0, (row * physics.tile_size as i32) as f32 - physics.body_height)
    })
}

fn edit_event(edit: &EditOutcome) -> Option<GameEvent> {
    match *edit {
        EditOutcome::Break {
            coord,
            tool,
            outcome,
        } => match outcome {
            BreakOutcome::Collected(block) | BreakOutcome::InventoryFull(block) => Some(GameEvent::BlockBroken {
                coord,
                block,
                tool,
                collected: matches!(outcome, BreakOutcome::Collected(_)),
            }),
            BreakOutcome::Cleared(block) => Some(GameEvent::BlockCleared { coord, block }),
            BreakOutcome::WrongTool { .. } | BreakOutcome::Unoccupied | BreakOutcome::OutOfReach => None,
        },
        EditOutcome::Place {
            coord,
            outcome: PlaceOutcome::Placed(block),
        } => Some(GameEvent::BlockPlaced { coord, block }),
        EditOutcome::Place { .. } | EditOutcome::Ignored => None,
    }
}

fn elapsed_us(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_micros()).unwrap_or(u64::MAX)
}

/// Running frame-time totals against the 60 FPS budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameBudget {
    frames: u64,
    total_us: u64,
    over_budget: u64,
}

impl FrameBudget {
    /// Adds one frame.
    pub fn record(&mut self, stats: &FrameStats) {
        self.frames += 1;
        self.total_us += stats.total_us;
        if stats.total_us > TARGET_FRAME_TIME.as_micros() as u64 {
            self.over_budget += 1;
        }
    }

    /// Frames recorded so far.
    #[inline]
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Mean frame time in milliseconds, zero before the first frame.
    #[must_use]
    pub fn avg_frame_ms(&self) -> f64 {
        if self.frames == 0 {
            return 0.0;
        }
        self.total_us as f64 / self.frames as f64 / 1000.0
    }

    /// Share of frames slower than the target, in `[0, 1]`.
    #[must_use]
    pub fn over_budget_ratio(&self) -> f64 {
        if self.frames == 0 {
            return 0.0;
        }
        self.over_budget as f64 / self.frames as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_core::{BlockType, Tile, TileCoord};

    fn flat_world() -> GeneratedWorld {
        let store = (-10..=10)
            .flat_map(|x| {
                [
                    Tile::new(TileCoord::new(x, 5), BlockType::Grass),
                    Tile::new(TileCoord::new(x, 6), BlockType::Dirt),
                ]
            })
            .collect();
        GeneratedWorld {
            store,
            surface: vec![5; 21],
            clouds: Vec::new(),
        }
    }

    #[test]
    fn test_spawns_on_column_zero() {
        let game = GameLoop::new(&GameConfig::default(), flat_world());
        let body = &game.player().body;
        assert!((body.rect.bottom() - 160.0).abs() < f32::EPSILON);
        assert_eq!(game.frame_count(), 0);
        assert!(!game.is_over());
    }

    #[test]
    fn test_idle_frames_keep_player_still() {
        let mut game = GameLoop::new(&GameConfig::default(), flat_world());
        let before = game.player().body.rect;
        for _ in 0..30 {
            let report = game.step(&FrameInput::default());
            assert!(report.step.grounded);
        }
        assert_eq!(game.player().body.rect, before);
        assert_eq!(game.frame_count(), 30);
        assert_eq!(game.stats().frames(), 30);
    }

    #[test]
    fn test_view_window_follows_player() {
        let game = GameLoop::new(&GameConfig::default(), flat_world());
        let window = game.view_window();
        assert_eq!(window.center(), TileCoord::new(0, 4));
        assert_eq!(window.side(), 51);
        assert_eq!(window.visible_tiles(game.store()).count(), 42);
    }

    #[test]
    fn test_frame_budget() {
        let mut budget = FrameBudget::default();
        assert!(budget.avg_frame_ms().abs() < f64::EPSILON);
        assert!(budget.over_budget_ratio().abs() < f64::EPSILON);

        for total_us in [1_000, 20_000] {
            budget.record(&FrameStats {
                total_us,
                ..FrameStats::default()
            });
        }
        assert_eq!(budget.frames(), 2);
        assert!((budget.avg_frame_ms() - 10.5).abs() < 1e-9);
        assert!((budget.over_budget_ratio() - 0.5).abs() < 1e-9);
    }
}
