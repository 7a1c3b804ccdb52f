//! # Inventory System
//!
//! Block counts in insertion order, the fixed tool set, and the hotbar
//! selection over both.
//!
//! ## Invariants
//!
//! - A held block always has a count of at least one. Taking the last one
//!   removes the entry.
//! - At most `max_block_slots` distinct blocks are held.
//! - The selection always points at an existing tool or block.

use blockfall_core::BlockType;

use crate::error::{EconomyError, EconomyResult};
use crate::tool::Tool;

/// Default number of distinct block types the player can hold.
pub const DEFAULT_MAX_BLOCK_SLOTS: usize = 7;

/// The hotbar entry in hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Index into the tool set.
    Tool(usize),
    /// Index into the block list.
    Block(usize),
}

impl Default for Selection {
    fn default() -> Self {
        Self::Tool(0)
    }
}

impl Selection {
    /// Returns true when a tool is in hand.
    #[inline]
    #[must_use]
    pub const fn is_tool(self) -> bool {
        matches!(self, Self::Tool(_))
    }
}

/// The player's tools and blocks.
#[derive(Clone, Debug)]
pub struct Inventory {
    tools: [Tool; 3],
    blocks: Vec<(BlockType, u32)>,
    max_block_slots: usize,
    selection: Selection,
}

impl Inventory {
    /// Creates an empty inventory with `max_block_slots` block slots.
    #[must_use]
    pub fn new(max_block_slots: usize) -> Self {
        Self {
            tools: Tool::ALL,
            blocks: Vec::with_capacity(max_block_slots),
            max_block_slots,
            selection: Selection::default(),
        }
    }

    /// The tool set, in hotbar order.
    #[inline]
    #[must_use]
    pub const fn tools(&self) -> &[Tool; 3] {
        &self.tools
    }

    /// Held blocks and their counts, in the order they were first collected.
    #[inline]
    #[must_use]
    pub fn blocks(&self) -> &[(BlockType, u32)] {
        &self.blocks
    }

    /// Number of block slots.
    #[inline]
    #[must_use]
    pub const fn max_block_slots(&self) -> usize {
        self.max_block_slots
    }

    /// Returns true if no new block type fits.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.blocks.len() >= self.max_block_slots
    }

    /// Count held of a block (zero if absent).
    #[must_use]
    pub fn count(&self, block: BlockType) -> u32 {
        self.position(block).map_or(0, |i| self.blocks[i].1)
    }

    /// Returns true if at least one of `block` is held.
    #[inline]
    #[must_use]
    pub fn contains(&self, block: BlockType) -> bool {
        self.position(block).is_some()
    }

    fn position(&self, block: BlockType) -> Option<usize> {
        self.blocks.iter().position(|(b, _)| *b == block)
    }

    /// Adds blocks, returning the new count.
    ///
    /// Existing entries always accept more. A new type needs a free slot.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::InventoryFull` if the type is new and every
    /// slot is taken.
    pub fn add_block(&mut self, block: BlockType, count: u32) -> EconomyResult<u32> {
        if let Some(i) = self.position(block) {
            let entry = &mut self.blocks[i].1;
            *entry = entry.saturating_add(count);
            return Ok(*entry);
        }
        if count == 0 {
            return Ok(0);
        }
        if self.is_full() {
            return Err(EconomyError::InventoryFull {
                capacity: self.max_block_slots,
            });
        }
        self.blocks.push((block, count));
        Ok(count)
    }

    /// Removes blocks, returning how many remain.
    ///
    /// Taking the last one removes the entry and puts the first tool in hand.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::UnknownBlock` if none are held, or
    /// `EconomyError::InsufficientBlocks` if fewer than `count` are held.
    pub fn remove_block(&mut self, block: BlockType, count: u32) -> EconomyResult<u32> {
        let i = self.position(block).ok_or(EconomyError::UnknownBlock(block))?;
        let available = self.blocks[i].1;
        if available < count {
            return Err(EconomyError::InsufficientBlocks {
                block,
                required: count,
                available,
            });
        }

        let remaining = available - count;
        if remaining == 0 {
            self.blocks.remove(i);
            self.selection = Selection::default();
        } else {
            self.blocks[i].1 = remaining;
        }
        Ok(remaining)
    }

    /// The current selection.
    #[inline]
    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Applies a number key.
    ///
    /// `1..=3` pick a tool, `4..` pick the block at `key - 4`, and `0` picks
    /// the last block (the first tool when there are none). Keys with no
    /// entry behind them leave the selection as it is.
    pub fn select_hotbar(&mut self, key: u8) {
        let key = usize::from(key);
        let tools = self.tools.len();

        if key == 0 {
            self.selection = self
                .blocks
                .len()
                .checked_sub(1)
                .map_or(Selection::Tool(0), Selection::Block);
        } else if key <= tools {
            self.selection = Selection::Tool(key - 1);
        } else if key - 1 - tools < self.blocks.len() {
            self.selection = Selection::Block(key - 1 - tools);
        }
    }

    /// The tool in hand, if a tool is selected.
    #[must_use]
    pub fn selected_tool(&self) -> Option<Tool> {
        match self.selection {
            Selection::Tool(i) => self.tools.get(i).copied(),
            Selection::Block(_) => None,
        }
    }

    /// The block in hand, if a block is selected.
    #[must_use]
    pub fn selected_block(&self) -> Option<BlockType> {
        match self.selection {
            Selection::Block(i) => self.blocks.get(i).map(|(b, _)| *b),
            Selection::Tool(_) => None,
        }
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BLOCK_SLOTS)
    }
}
