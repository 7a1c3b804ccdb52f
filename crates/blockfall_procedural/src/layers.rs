//! # Layer Rules
//!
//! The probabilities and row offsets that turn a surface profile into
//! layered terrain. Every probability is a named default and can be
//! overridden from config.
//!
//! ```text
//! surface - 3   tree trunk start (tree_chance)
//! surface - 1   flower / hazard decoration
//! surface       grass
//! +1 ..= +3     dirt
//! +4 ..= +7     cobblestone (shallow_stone_chance) or dirt
//! deeper        gem | cobblestone | granite | andesite   (cumulative bands)
//! ```

use blockfall_core::BlockType;
use serde::{Deserialize, Serialize};

/// Rows above the surface where a trunk may start.
pub const TRUNK_START_OFFSET: i32 = 3;

/// Dirt rows directly under the surface.
pub const DIRT_DEPTH: i32 = 3;

/// Mixed cobblestone/dirt rows under the dirt.
pub const SHALLOW_STONE_DEPTH: i32 = 4;

/// Default chance of a trunk starting above a column.
pub const DEFAULT_TREE_CHANCE: f64 = 0.15;
/// Default chance of a flower above the surface.
pub const DEFAULT_FLOWER_CHANCE: f64 = 0.08;
/// Default chance of a hazard above the surface (when no flower).
pub const DEFAULT_HAZARD_CHANCE: f64 = 0.15;
/// Default chance of cobblestone (vs dirt) in the shallow band.
pub const DEFAULT_SHALLOW_STONE_CHANCE: f64 = 0.8;
/// Default width of the gem band in the deep draw.
pub const DEFAULT_GEM_BAND: f64 = 0.05;
/// Default width of the cobblestone band in the deep draw.
pub const DEFAULT_DEEP_COBBLESTONE_BAND: f64 = 0.35;
/// Default width of the granite band in the deep draw.
pub const DEFAULT_GRANITE_BAND: f64 = 0.30;

/// Probabilities that shape the terrain.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerRules {
    /// Chance of a trunk starting three rows above the surface.
    pub tree_chance: f64,
    /// Chance of a flower (either variant) one row above the surface.
    pub flower_chance: f64,
    /// Chance of a hazard one row above the surface, drawn when no flower.
    pub hazard_chance: f64,
    /// Chance of cobblestone in the shallow band (dirt otherwise).
    pub shallow_stone_chance: f64,
    /// Width of the gem band.
    pub gem_band: f64,
    /// Width of the cobblestone band.
    pub cobblestone_band: f64,
    /// Width of the granite band. Andesite takes the remainder.
    pub granite_band: f64,
}

impl Default for LayerRules {
    fn default() -> Self {
        Self {
            tree_chance: DEFAULT_TREE_CHANCE,
            flower_chance: DEFAULT_FLOWER_CHANCE,
            hazard_chance: DEFAULT_HAZARD_CHANCE,
            shallow_stone_chance: DEFAULT_SHALLOW_STONE_CHANCE,
            gem_band: DEFAULT_GEM_BAND,
            cobblestone_band: DEFAULT_DEEP_COBBLESTONE_BAND,
            granite_band: DEFAULT_GRANITE_BAND,
        }
    }
}

impl LayerRules {
    /// Classifies a deep-layer draw `r ∈ [0, 1)` by cumulative bands.
    ///
    /// Band upper bounds are inclusive, so `r == gem_band` is still gem.
    /// Every draw maps to exactly one block.
    #[must_use]
    pub fn deep_block(&self, r: f64) -> BlockType {
        let gem = self.gem_band;
        let cobblestone = gem + self.cobblestone_band;
        let granite = cobblestone + self.granite_band;

        if r <= gem {
            BlockType::Gem
        } else if r <= cobblestone {
            BlockType::Cobblestone
        } else if r <= granite {
            BlockType::Granite
        } else {
            BlockType::Andesite
        }
    }

    /// Classifies a shallow-band draw `r ∈ [0, 1)`.
    #[must_use]
    pub fn shallow_block(&self, r: f64) -> BlockType {
        if r < self.shallow_stone_chance {
            BlockType::Cobblestone
        } else {
            BlockType::Dirt
        }
    }

    /// Lists the probabilities with their names, for validation.
    #[must_use]
    pub fn probabilities(&self) -> [(&'static str, f64); 7] {
        [
            ("tree_chance", self.tree_chance),
            ("flower_chance", self.flower_chance),
            ("hazard_chance", self.hazard_chance),
            ("shallow_stone_chance", self.shallow_stone_chance),
            ("gem_band", self.gem_band),
            ("cobblestone_band", self.cobblestone_band),
            ("granite_band", self.granite_band),
        ]
    }

    /// Sum of the explicit deep bands (andesite gets `1 - sum`).
    #[must_use]
    pub fn deep_band_total(&self) -> f64 {
        self.gem_band + self.cobblestone_band + self.granite_band
    }
}
