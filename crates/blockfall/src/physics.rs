//! # BLOCKFALL Physics System
//!
//! Kinematic body against the tile grid.
//!
//! Features:
//! - Gravity with a fall-speed cap
//! - Per-axis rectangle collision against solid tiles (X first, then Y)
//! - Grounded probe for jumping
//! - Cumulative fall tracking and fall damage
//!
//! Contacts found after each axis move are applied in discovery order
//! (row-major) without re-checking overlap between them. A body pushed
//! out of one tile may end up touching the corner of another for a frame.

use blockfall_core::{Rect, TileCoord, TileStore, DEFAULT_TILE_SIZE};
use serde::{Deserialize, Serialize};

/// Downward acceleration (pixels per frame squared).
pub const GRAVITY: f32 = 0.5;

/// Fall speed cap (pixels per frame).
pub const MAX_FALL_SPEED: f32 = 10.0;

/// Vertical velocity set by a jump (pixels per frame, negative is up).
pub const JUMP_IMPULSE: f32 = -8.0;

/// Falls strictly longer than this many tiles cost a life.
pub const FALL_DAMAGE_THRESHOLD: f32 = 7.0;

/// Body width and height (pixels).
pub const BODY_SIZE: f32 = 32.0;

/// Lives a fresh body starts with.
pub const DEFAULT_LIVES: u32 = 5;

/// Tunable physics constants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration.
    pub gravity: f32,
    /// Fall speed cap.
    pub max_fall_speed: f32,
    /// Jump velocity.
    pub jump_impulse: f32,
    /// Fall-damage threshold in tiles.
    pub fall_damage_threshold: f32,
    /// Tile edge length in pixels.
    pub tile_size: u32,
    /// Body width in pixels.
    pub body_width: f32,
    /// Body height in pixels.
    pub body_height: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            max_fall_speed: MAX_FALL_SPEED,
            jump_impulse: JUMP_IMPULSE,
            fall_damage_threshold: FALL_DAMAGE_THRESHOLD,
            tile_size: DEFAULT_TILE_SIZE,
            body_width: BODY_SIZE,
            body_height: BODY_SIZE,
        }
    }
}

// ============================================================================
// BODY
// ============================================================================

/// A moving rectangle with fall state and lives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Position and size in pixels.
    pub rect: Rect,
    /// Velocity `[vx, vy]` in pixels per frame.
    pub velocity: [f32; 2],
    /// Result of the last end-of-frame grounded probe.
    pub grounded: bool,
    /// Set while airborne.
    pub falling: bool,
    /// Tiles fallen since the fall started.
    pub fall_distance: f32,
    /// Remaining lives.
    pub lives: u32,
}

impl Body {
    /// Creates a resting body with its top-left corner at `(x, y)`.
    #[must_use]
    pub fn new(x: f32, y: f32, config: &PhysicsConfig, lives: u32) -> Self {
        Self {
            rect: Rect::new(x, y, config.body_width, config.body_height),
            velocity: [0.0, 0.0],
            grounded: false,
            falling: false,
            fall_distance: 0.0,
            lives,
        }
    }

    /// The tile under the body's center.
    #[must_use]
    pub fn center_tile(&self, tile_size: u32) -> TileCoord {
        let [cx, cy] = self.rect.center();
        TileCoord::from_pixel(cx, cy, tile_size)
    }

    /// Returns true while lives remain.
    #[inline]
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.lives > 0
    }
}

/// One frame of movement intent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepInput {
    /// Horizontal velocity for this frame.
    pub vx: f32,
    /// Jump requested.
    pub jump: bool,
}

/// A fall that cost a life.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallDamage {
    /// Effective fall distance in tiles.
    pub distance: f32,
    /// Lives left afterwards.
    pub lives_remaining: u32,
}

/// What happened during one physics step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepOutcome {
    /// Grounded at the end of the frame.
    pub grounded: bool,
    /// A downward contact stopped the body this frame.
    pub landed: bool,
    /// A jump was applied this frame.
    pub jumped: bool,
    /// Fall damage taken on landing, if any.
    pub fall_damage: Option<FallDamage>,
}

// ============================================================================
// STEP
// ============================================================================

/// Checks for a solid tile one pixel below the body. Does not move it.
#[must_use]
pub fn is_grounded(body: &Body, store: &TileStore, tile_size: u32) -> bool {
    store.any_solid_overlapping(&body.rect.translated(0.0, 1.0), tile_size)
}

/// Advances `body` by one frame against the solid tiles in `store`.
pub fn step(body: &mut Body, store: &TileStore, input: StepInput, config: &PhysicsConfig) -> StepOutcome {
    let tile_size = config.tile_size;
    let mut outcome = StepOutcome::default();

    if input.jump && is_grounded(body, store, tile_size) {
        body.velocity[1] = config.jump_impulse;
        outcome.jumped = true;
    }

    body.velocity[1] = (body.velocity[1] + config.gravity).min(config.max_fall_speed);
    body.velocity[0] = input.vx;

    body.rect.x += body.velocity[0];
    resolve_x(body, store, tile_size);

    body.rect.y += body.velocity[1];
    resolve_y(body, store, config, &mut outcome);

    let grounded = is_grounded(body, store, tile_size);
    if grounded {
        body.falling = false;
        body.fall_distance = 0.0;
    } else if body.falling {
        body.fall_distance += body.velocity[1].abs() / tile_size as f32;
    } else {
        body.falling = true;
        body.fall_distance = 0.0;
    }
    body.grounded = grounded;
    outcome.grounded = grounded;

    outcome
}

fn resolve_x(body: &mut Body, store: &TileStore, tile_size: u32) {
    for tile in store.solid_tiles_overlapping(&body.rect, tile_size) {
        let tile_rect = tile.pixel_rect(tile_size);
        if body.velocity[0] > 0.0 {
            body.rect.set_right(tile_rect.x);
        } else if body.velocity[0] < 0.0 {
            body.rect.x = tile_rect.right();
        }
        body.velocity[0] = 0.0;
    }
}

/// World row zero acts as a floor that never collides.
#[allow(clippy::float_cmp)]
fn at_world_top(rect: &Rect) -> bool {
    rect.y == 0.0
}

fn resolve_y(body: &mut Body, store: &TileStore, config: &PhysicsConfig, outcome: &mut StepOutcome) {
    let tile_size = config.tile_size;

    for tile in store.solid_tiles_overlapping(&body.rect, tile_size) {
        if at_world_top(&body.rect) {
            body.falling = false;
            body.fall_distance = 0.0;
            continue;
        }

        let tile_rect = tile.pixel_rect(tile_size);
        if body.velocity[1] > 0.0 {
            if body.falling {
                let drop = (body.rect.bottom() - tile_rect.y).abs() / tile_size as f32;
                let effective = body.fall_distance.max(drop);
                // A body with no lives left takes no further damage.
                if effective > config.fall_damage_threshold && body.lives > 0 {
                    body.lives -= 1;
                    outcome.fall_damage = Some(FallDamage {
                        distance: effective,
                        lives_remaining: body.lives,
                    });
                    tracing::debug!(distance = effective, lives = body.lives, "fall damage");
                }
                body.fall_distance = 0.0;
            }
            body.rect.set_bottom(tile_rect.y);
            body.velocity[1] = 0.0;
            body.falling = false;
            outcome.landed = true;
        } else if body.velocity[1] < 0.0 {
            body.rect.y = tile_rect.bottom();
            body.velocity[1] = 0.0;
        }
    }
}
