//! # BLOCKFALL Economy System
//!
//! What the player carries and what their tools can do.
//!
//! ## Design Principles
//!
//! 1. **Data-driven breaking** - Which tool yields which block is a table,
//!    not a chain of conditionals
//! 2. **Bounded inventory** - A fixed number of block slots, counts never zero
//! 3. **Always-valid selection** - The hotbar never points at a missing entry
//!
//! ## Example
//!
//! ```rust
//! use blockfall_core::BlockType;
//! use blockfall_economy::{BreakRules, Inventory, Tool};
//!
//! let rules = BreakRules::default();
//! assert!(rules.yields(Tool::Shovel, BlockType::Dirt));
//!
//! let mut inventory = Inventory::default();
//! inventory.add_block(BlockType::Dirt, 1).unwrap();
//! assert_eq!(inventory.count(BlockType::Dirt), 1);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod inventory;
pub mod tool;

pub use error::{EconomyError, EconomyResult};
pub use inventory::{Inventory, Selection, DEFAULT_MAX_BLOCK_SLOTS};
pub use tool::{BreakAction, BreakRules, Tool};
