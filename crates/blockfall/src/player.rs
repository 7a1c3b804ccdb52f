//! # Player
//!
//! The body, the inventory, and the sprint budget, plus the translation
//! from held keys to a horizontal velocity.

use blockfall_economy::Inventory;
use serde::{Deserialize, Serialize};

use crate::physics::{Body, PhysicsConfig, StepInput, DEFAULT_LIVES};

/// Walking speed (pixels per frame).
pub const BASE_SPEED: f32 = 3.0;

/// Sprinting speed (pixels per frame).
pub const SPRINT_SPEED: f32 = 7.0;

/// Full stamina.
pub const MAX_STAMINA: f32 = 100.0;

/// Player tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Starting lives.
    pub max_lives: u32,
    /// Distinct block types the inventory holds.
    pub max_block_slots: usize,
    /// Walking speed.
    pub base_speed: f32,
    /// Sprinting speed.
    pub sprint_speed: f32,
    /// Full stamina.
    pub max_stamina: f32,
    /// Stamina regained per non-sprinting frame.
    pub stamina_regen: f32,
    /// Stamina spent per sprinting frame.
    pub stamina_cost: f32,
    /// Sprinting needs stamina strictly above this fraction of the maximum.
    pub sprint_threshold: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_lives: DEFAULT_LIVES,
            max_block_slots: blockfall_economy::DEFAULT_MAX_BLOCK_SLOTS,
            base_speed: BASE_SPEED,
            sprint_speed: SPRINT_SPEED,
            max_stamina: MAX_STAMINA,
            stamina_regen: 0.5,
            stamina_cost: 1.0,
            sprint_threshold: 0.3,
        }
    }
}

/// Sprint budget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stamina {
    current: f32,
    max: f32,
    regen: f32,
    cost: f32,
    threshold: f32,
}

impl Stamina {
    /// A full budget.
    #[must_use]
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            current: config.max_stamina,
            max: config.max_stamina,
            regen: config.stamina_regen,
            cost: config.stamina_cost,
            threshold: config.sprint_threshold,
        }
    }

    /// Current stamina.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> f32 {
        self.current
    }

    /// Current stamina as a fraction of the maximum.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        if self.max > 0.0 {
            self.current / self.max
        } else {
            0.0
        }
    }

    /// Advances one frame and returns whether this frame sprints.
    ///
    /// A sprint attempt below the threshold walks without regenerating.
    pub fn tick(&mut self, sprint_requested: bool) -> bool {
        if sprint_requested {
            if self.current > self.max * self.threshold {
                self.current -= self.cost;
                return true;
            }
            return false;
        }
        self.current = (self.current + self.regen).min(self.max);
        false
    }
}

/// Held movement keys for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    /// Move left. Wins over `right`.
    pub left: bool,
    /// Move right.
    pub right: bool,
    /// Sprint modifier.
    pub sprint: bool,
    /// Jump.
    pub jump: bool,
}

/// The player.
#[derive(Clone, Debug)]
pub struct Player {
    /// Physical body.
    pub body: Body,
    /// Tools and blocks.
    pub inventory: Inventory,
    /// Sprint budget.
    pub stamina: Stamina,
    config: PlayerConfig,
}

impl Player {
    /// Creates a player with its body's top-left corner at `(x, y)`.
    #[must_use]
    pub fn spawn(x: f32, y: f32, config: PlayerConfig, physics: &PhysicsConfig) -> Self {
        Self {
            body: Body::new(x, y, physics, config.max_lives),
            inventory: Inventory::new(config.max_block_slots),
            stamina: Stamina::new(&config),
            config,
        }
    }

    /// The configuration this player was created with.
    #[must_use]
    pub const fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Turns held keys into this frame's physics input.
    ///
    /// Stamina is settled first, so the speed reflects this frame's sprint.
    pub fn movement(&mut self, intent: MoveIntent) -> StepInput {
        let moving = intent.left || intent.right;
        let sprinting = self.stamina.tick(intent.sprint && moving);
        let speed = if sprinting {
            self.config.sprint_speed
        } else {
            self.config.base_speed
        };

        let vx = if intent.left {
            -speed
        } else if intent.right {
            speed
        } else {
            0.0
        };

        StepInput {
            vx,
            jump: intent.jump,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::spawn(0.0, 0.0, PlayerConfig::default(), &PhysicsConfig::default())
    }

    #[test]
    fn test_walk_and_sprint_speeds() {
        let mut p = player();
        let walk = p.movement(MoveIntent {
            right: true,
            ..MoveIntent::default()
        });
        assert!((walk.vx - BASE_SPEED).abs() < f32::EPSILON);

        let sprint = p.movement(MoveIntent {
            left: true,
            sprint: true,
            ..MoveIntent::default()
        });
        assert!((sprint.vx + SPRINT_SPEED).abs() < f32::EPSILON);
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut p = player();
        let input = p.movement(MoveIntent {
            left: true,
            right: true,
            ..MoveIntent::default()
        });
        assert!(input.vx < 0.0);
    }

    #[test]
    fn test_sprint_drains_to_threshold() {
        let mut p = player();
        let intent = MoveIntent {
            right: true,
            sprint: true,
            ..MoveIntent::default()
        };

        let mut sprint_frames = 0;
        for _ in 0..200 {
            if p.movement(intent).vx > BASE_SPEED {
                sprint_frames += 1;
            }
        }
        // 100 down to 30 at one per frame.
        assert_eq!(sprint_frames, 70);
        assert!((p.stamina.current() - 30.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_standing_sprint_regenerates() {
        let mut p = player();
        let intent = MoveIntent {
            right: true,
            sprint: true,
            ..MoveIntent::default()
        };
        for _ in 0..10 {
            p.movement(intent);
        }
        assert!((p.stamina.current() - 90.0).abs() < f32::EPSILON);

        // Shift alone does not sprint.
        p.movement(MoveIntent {
            sprint: true,
            ..MoveIntent::default()
        });
        assert!((p.stamina.current() - 90.5).abs() < f32::EPSILON);

        for _ in 0..100 {
            p.movement(MoveIntent::default());
        }
        assert!((p.stamina.fraction() - 1.0).abs() < f32::EPSILON);
    }
}
