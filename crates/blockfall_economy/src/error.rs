//! # Economy Error Types
//!
//! All errors that can occur in the economy system.

use blockfall_core::BlockType;
use thiserror::Error;

/// Errors that can occur in the economy system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EconomyError {
    /// Every block slot is taken and the block is not already held.
    #[error("inventory full: all {capacity} block slots in use")]
    InventoryFull {
        /// Number of block slots.
        capacity: usize,
    },

    /// Attempted to take more blocks than are held.
    #[error("insufficient blocks: need {required} {block}, have {available}")]
    InsufficientBlocks {
        /// The block that was short.
        block: BlockType,
        /// The amount required.
        required: u32,
        /// The amount available.
        available: u32,
    },

    /// The block is not in the inventory at all.
    #[error("block not in inventory: {0}")]
    UnknownBlock(BlockType),
}

/// Result type for economy operations.
pub type EconomyResult<T> = Result<T, EconomyError>;
