//! # World Edit Interface
//!
//! Reach-gated break and place, and the mouse-click dispatch on top of them.
//!
//! Every rejection is a value. Nothing here returns an error or panics,
//! and a rejected edit never touches the store or the inventory.
//!
//! ## Reachability
//!
//! The actor's tile is the tile under the body's center. A target is in
//! reach when `|dx| <= horizontal` and `|dy| <= vertical` (defaults 2 and 3).

use blockfall_core::{BlockType, Tile, TileCoord, TileStore, DEFAULT_TILE_SIZE};
use blockfall_economy::{BreakAction, BreakRules, EconomyError, Inventory, Tool};
use serde::{Deserialize, Serialize};

use crate::physics::Body;
use crate::view::Camera;

/// Reach tolerances in tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReachConfig {
    /// Columns either side of the actor.
    pub horizontal: i32,
    /// Rows above or below the actor.
    pub vertical: i32,
}

impl Default for ReachConfig {
    fn default() -> Self {
        Self {
            horizontal: 2,
            vertical: 3,
        }
    }
}

impl ReachConfig {
    /// Returns true if `target` is within reach of `actor`.
    #[must_use]
    pub fn allows(&self, actor: TileCoord, target: TileCoord) -> bool {
        (target.x - actor.x).abs() <= self.horizontal && (target.y - actor.y).abs() <= self.vertical
    }
}

/// Result of a break attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreakOutcome {
    /// Removed and added to the inventory.
    Collected(BlockType),
    /// Removed, but the inventory had no slot for a new type.
    InventoryFull(BlockType),
    /// Removed without a yield.
    Cleared(BlockType),
    /// The tool cannot break this block. Nothing changed.
    WrongTool {
        /// Block at the target.
        block: BlockType,
        /// Tool that was used.
        tool: Tool,
    },
    /// Nothing at the target.
    Unoccupied,
    /// Target too far from the actor.
    OutOfReach,
}

impl BreakOutcome {
    /// Returns true if the tile was removed.
    #[must_use]
    pub const fn removed(&self) -> bool {
        matches!(
            self,
            Self::Collected(_) | Self::InventoryFull(_) | Self::Cleared(_)
        )
    }
}

/// Result of a place attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// A tile of this type now occupies the target.
    Placed(BlockType),
    /// The target is already occupied.
    Occupied,
    /// Target too far from the actor.
    OutOfReach,
    /// None of the block held.
    NotInInventory,
}

/// Mouse button of a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    /// Breaks with the selected tool.
    Primary,
    /// Places the selected block.
    Secondary,
}

/// A mouse click in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Click {
    /// Position on screen.
    pub screen_pos: [f32; 2],
    /// Button pressed.
    pub button: MouseButton,
}

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// A primary click attempted a break.
    Break {
        /// Target tile.
        coord: TileCoord,
        /// Tool used.
        tool: Tool,
        /// Result.
        outcome: BreakOutcome,
    },
    /// A secondary click attempted a place.
    Place {
        /// Target tile.
        coord: TileCoord,
        /// Result.
        outcome: PlaceOutcome,
    },
    /// The button does not apply to the current selection.
    Ignored,
}

/// Applies break and place edits to a tile store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldEditor {
    rules: BreakRules,
    reach: ReachConfig,
    tile_size: u32,
}

impl Default for WorldEditor {
    fn default() -> Self {
        Self::new(BreakRules::default(), ReachConfig::default(), DEFAULT_TILE_SIZE)
    }
}

impl WorldEditor {
    /// Creates an editor.
    #[must_use]
    pub fn new(rules: BreakRules, reach: ReachConfig, tile_size: u32) -> Self {
        Self {
            rules,
            reach,
            tile_size,
        }
    }

    /// The break table in use.
    #[must_use]
    pub fn rules(&self) -> &BreakRules {
        &self.rules
    }

    /// The tile an actor edits from.
    #[must_use]
    pub fn actor_tile(&self, body: &Body) -> TileCoord {
        body.center_tile(self.tile_size)
    }

    /// Tries to break the tile at `coord` with `tool`.
    pub fn break_block(
        &self,
        store: &mut TileStore,
        inventory: &mut Inventory,
        actor: TileCoord,
        coord: TileCoord,
        tool: Tool,
    ) -> BreakOutcome {
        if !self.reach.allows(actor, coord) {
            return BreakOutcome::OutOfReach;
        }
        let Some(block) = store.block_at(coord) else {
            return BreakOutcome::Unoccupied;
        };

        let outcome = match self.rules.action(tool, block) {
            BreakAction::Refuse => return BreakOutcome::WrongTool { block, tool },
            BreakAction::Clear => BreakOutcome::Cleared(block),
            BreakAction::Collect => match inventory.add_block(block, 1) {
                Ok(_) => BreakOutcome::Collected(block),
                Err(EconomyError::InventoryFull { .. }) => BreakOutcome::InventoryFull(block),
                Err(err) => {
                    tracing::warn!(%err, %block, "unexpected inventory error while collecting");
                    BreakOutcome::InventoryFull(block)
                }
            },
        };

        store.remove(coord);
        tracing::debug!(%coord, %block, %tool, ?outcome, "block broken");
        outcome
    }

    /// Tries to place one `block` from the inventory at `coord`.
    pub fn place_block(
        &self,
        store: &mut TileStore,
        inventory: &mut Inventory,
        actor: TileCoord,
        coord: TileCoord,
        block: BlockType,
    ) -> PlaceOutcome {
        if !self.reach.allows(actor, coord) {
            return PlaceOutcome::OutOfReach;
        }
        if store.contains(coord) {
            return PlaceOutcome::Occupied;
        }
        if inventory.remove_block(block, 1).is_err() {
            return PlaceOutcome::NotInInventory;
        }

        store.insert(Tile::new(coord, block));
        tracing::debug!(%coord, %block, "block placed");
        PlaceOutcome::Placed(block)
    }

    /// Dispatches a click on the tile under the cursor.
    ///
    /// Primary breaks with the selected tool, secondary places the selected
    /// block. A button that does not match the selection is ignored.
    pub fn handle_click(
        &self,
        store: &mut TileStore,
        inventory: &mut Inventory,
        body: &Body,
        camera: &Camera,
        click: Click,
    ) -> EditOutcome {
        let coord = camera.screen_to_tile(click.screen_pos, self.tile_size);
        let actor = self.actor_tile(body);

        match click.button {
            MouseButton::Primary => match inventory.selected_tool() {
                Some(tool) => EditOutcome::Break {
                    coord,
                    tool,
                    outcome: self.break_block(store, inventory, actor, coord, tool),
                },
                None => EditOutcome::Ignored,
            },
            MouseButton::Secondary => match inventory.selected_block() {
                Some(block) => EditOutcome::Place {
                    coord,
                    outcome: self.place_block(store, inventory, actor, coord, block),
                },
                None => EditOutcome::Ignored,
            },
        }
    }
}
