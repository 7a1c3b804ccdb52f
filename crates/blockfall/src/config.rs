//! # Game Configuration
//!
//! Everything tunable, loaded once at startup from TOML. Every field has a
//! default, so an empty file is a valid configuration.
//!
//! ```toml
//! seed = 42
//!
//! [terrain]
//! width = 200
//! height = 200
//!
//! [terrain.layers]
//! tree_chance = 0.15
//!
//! [player]
//! max_lives = 5
//!
//! [break_rules]
//! axe = ["wood", "flower_a", "flower_b"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use blockfall_economy::BreakRules;
use blockfall_procedural::{TerrainConfig, WorldSeed};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game_loop::GameLoopConfig;
use crate::physics::PhysicsConfig;
use crate::player::PlayerConfig;
use crate::view::ViewConfig;
use crate::world_edit::ReachConfig;

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// The whole game configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// World seed. Absent means derived from the clock.
    pub seed: Option<u64>,
    /// World size and layering.
    pub terrain: TerrainConfig,
    /// Collision constants.
    pub physics: PhysicsConfig,
    /// Player tuning.
    pub player: PlayerConfig,
    /// Edit reach.
    pub reach: ReachConfig,
    /// Render window and viewport.
    pub view: ViewConfig,
    /// Break table.
    pub break_rules: BreakRules,
    /// Frame loop settings.
    #[serde(rename = "loop")]
    pub game_loop: GameLoopConfig,
}

impl GameConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or unknown block
    /// names, and `ConfigError::Invalid` for out-of-range values.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`GameConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// The configured seed, or one derived from the clock.
    #[must_use]
    pub fn world_seed(&self) -> WorldSeed {
        self.seed.map_or_else(WorldSeed::from_clock, WorldSeed::new)
    }

    /// Checks ranges and cross-section consistency.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first bad value.
    pub fn validate(&self) -> ConfigResult<()> {
        let terrain = &self.terrain;
        if terrain.width == 0 || terrain.height == 0 {
            return Err(invalid("terrain width and height must be positive"));
        }
        if terrain.tile_size == 0 {
            return Err(invalid("terrain.tile_size must be positive"));
        }
        if self.physics.tile_size != terrain.tile_size {
            return Err(invalid(format!(
                "physics.tile_size ({}) must match terrain.tile_size ({})",
                self.physics.tile_size, terrain.tile_size
            )));
        }

        for (name, p) in terrain.layers.probabilities() {
            if !(0.0..=1.0).contains(&p) {
                return Err(invalid(format!("terrain.layers.{name} = {p} is outside [0, 1]")));
            }
        }
        let bands = terrain.layers.deep_band_total();
        if bands > 1.0 {
            return Err(invalid(format!("deep layer bands sum to {bands}, above 1")));
        }

        if self.physics.body_width <= 0.0 || self.physics.body_height <= 0.0 {
            return Err(invalid("physics body size must be positive"));
        }
        if self.physics.max_fall_speed <= 0.0 {
            return Err(invalid("physics.max_fall_speed must be positive"));
        }

        let player = &self.player;
        if player.max_block_slots == 0 {
            return Err(invalid("player.max_block_slots must be positive"));
        }
        if !(0.0..=1.0).contains(&player.sprint_threshold) {
            return Err(invalid("player.sprint_threshold is outside [0, 1]"));
        }

        if self.reach.horizontal < 0 || self.reach.vertical < 0 {
            return Err(invalid("reach tolerances must not be negative"));
        }
        if self.view.render_distance < 0 {
            return Err(invalid("view.render_distance must not be negative"));
        }
        if self.view.viewport_width == 0 || self.view.viewport_height == 0 {
            return Err(invalid("viewport size must be positive"));
        }
        if self.game_loop.event_capacity == 0 {
            return Err(invalid("loop.event_capacity must be positive"));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(message.into())
}
