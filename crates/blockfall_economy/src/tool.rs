//! # Tools and Break Rules
//!
//! The tool set is fixed. What each tool may break is a table, with the
//! defaults below as named constants and every entry overridable from config.

use std::fmt;

use blockfall_core::BlockType;
use serde::{Deserialize, Serialize};

/// A breaking tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Wood and flowers.
    Axe,
    /// Stone, ore and flowers.
    Pickaxe,
    /// Soil and flowers.
    Shovel,
}

impl Tool {
    /// Hotbar order.
    pub const ALL: [Self; 3] = [Self::Axe, Self::Pickaxe, Self::Shovel];

    /// Stable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Axe => "axe",
            Self::Pickaxe => "pickaxe",
            Self::Shovel => "shovel",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Blocks the axe yields.
pub const AXE_BREAKS: &[BlockType] = &[BlockType::Wood, BlockType::FlowerA, BlockType::FlowerB];

/// Blocks the pickaxe yields.
pub const PICKAXE_BREAKS: &[BlockType] = &[
    BlockType::Cobblestone,
    BlockType::Andesite,
    BlockType::Granite,
    BlockType::Gem,
    BlockType::FlowerA,
    BlockType::FlowerB,
];

/// Blocks the shovel yields.
pub const SHOVEL_BREAKS: &[BlockType] = &[
    BlockType::Grass,
    BlockType::Dirt,
    BlockType::FlowerA,
    BlockType::FlowerB,
];

/// Blocks any tool removes without a yield.
pub const CLEAR_WITHOUT_YIELD: &[BlockType] = &[BlockType::Leaves, BlockType::Hazard];

/// What a tool does to a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreakAction {
    /// Remove the block and add it to the inventory.
    Collect,
    /// Remove the block, nothing is collected.
    Clear,
    /// Leave the block alone.
    Refuse,
}

/// Breakable sets per tool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakRules {
    /// Blocks the axe yields.
    pub axe: Vec<BlockType>,
    /// Blocks the pickaxe yields.
    pub pickaxe: Vec<BlockType>,
    /// Blocks the shovel yields.
    pub shovel: Vec<BlockType>,
    /// Blocks every tool removes without a yield.
    pub clear_without_yield: Vec<BlockType>,
}

impl Default for BreakRules {
    fn default() -> Self {
        Self {
            axe: AXE_BREAKS.to_vec(),
            pickaxe: PICKAXE_BREAKS.to_vec(),
            shovel: SHOVEL_BREAKS.to_vec(),
            clear_without_yield: CLEAR_WITHOUT_YIELD.to_vec(),
        }
    }
}

impl BreakRules {
    /// The yield set of a tool.
    #[must_use]
    pub fn breakable(&self, tool: Tool) -> &[BlockType] {
        match tool {
            Tool::Axe => &self.axe,
            Tool::Pickaxe => &self.pickaxe,
            Tool::Shovel => &self.shovel,
        }
    }

    /// Returns true if `tool` collects `block`.
    #[must_use]
    pub fn yields(&self, tool: Tool, block: BlockType) -> bool {
        self.breakable(tool).contains(&block)
    }

    /// Decides what `tool` does to `block`. A yield wins over a free clear.
    #[must_use]
    pub fn action(&self, tool: Tool, block: BlockType) -> BreakAction {
        if self.yields(tool, block) {
            BreakAction::Collect
        } else if self.clear_without_yield.contains(&block) {
            BreakAction::Clear
        } else {
            BreakAction::Refuse
        }
    }
}
