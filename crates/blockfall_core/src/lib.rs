//! # BLOCKFALL Core
//!
//! The data every other crate agrees on:
//! - [`BlockType`]: the closed set of blocks and their solidity
//! - [`TileCoord`] / [`Tile`]: a single occupied grid cell
//! - [`Rect`]: pixel-space axis-aligned rectangle
//! - [`TileStore`]: sparse coordinate → tile mapping
//!
//! ## Architecture Rules
//!
//! 1. **Air is never stored** - a coordinate is present iff a block occupies it
//! 2. **Tiles are immutable** - a cell changes by remove + insert, never in place
//! 3. **Rows grow downward** - `y + 1` is the cell below `y`
//!
//! ## Example
//!
//! ```rust
//! use blockfall_core::{BlockType, Tile, TileCoord, TileStore};
//!
//! let mut store = TileStore::new();
//! store.insert(Tile::new(TileCoord::new(0, 0), BlockType::Grass));
//! assert!(store.contains(TileCoord::new(0, 0)));
//! assert!(!store.contains(TileCoord::new(0, -1)));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod geometry;
pub mod store;
pub mod tile;

pub use geometry::Rect;
pub use store::TileStore;
pub use tile::{BlockType, Tile, TileCoord, DEFAULT_TILE_SIZE};
