//! # Tile Store
//!
//! Sparse mapping from [`TileCoord`] to [`Tile`].
//!
//! The store replaces a fixed 2-D array because break/place create and
//! destroy arbitrary cells at runtime. Lookups are O(1); a range query
//! only touches the cells the range covers.
//!
//! ## Invariant
//!
//! A coordinate is present iff a block occupies that cell. Air is never
//! materialised, so "not present" always means "empty".

use std::collections::HashMap;

use crate::geometry::Rect;
use crate::tile::{BlockType, Tile, TileCoord};

/// Sparse coordinate-indexed collection of all non-air tiles.
#[derive(Clone, Debug, Default)]
pub struct TileStore {
    tiles: HashMap<TileCoord, Tile>,
}

impl TileStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: HashMap::new(),
        }
    }

    /// Creates an empty store sized for `capacity` tiles.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tiles: HashMap::with_capacity(capacity),
        }
    }

    /// Number of occupied cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns true if no cell is occupied.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Gets the tile at a coordinate.
    #[inline]
    #[must_use]
    pub fn get(&self, coord: TileCoord) -> Option<&Tile> {
        self.tiles.get(&coord)
    }

    /// Gets the block type at a coordinate.
    #[inline]
    #[must_use]
    pub fn block_at(&self, coord: TileCoord) -> Option<BlockType> {
        self.tiles.get(&coord).map(|t| t.block)
    }

    /// Returns true if the cell is occupied.
    #[inline]
    #[must_use]
    pub fn contains(&self, coord: TileCoord) -> bool {
        self.tiles.contains_key(&coord)
    }

    /// Inserts a tile, returning the tile it displaced (if any).
    pub fn insert(&mut self, tile: Tile) -> Option<Tile> {
        self.tiles.insert(tile.coord, tile)
    }

    /// Removes and returns the tile at a coordinate.
    pub fn remove(&mut self, coord: TileCoord) -> Option<Tile> {
        self.tiles.remove(&coord)
    }

    /// Iterates over all tiles in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Returns the top-most (lowest row index) occupied row in a column.
    #[must_use]
    pub fn column_top(&self, x: i32) -> Option<i32> {
        self.tiles
            .keys()
            .filter(|c| c.x == x)
            .map(|c| c.y)
            .min()
    }

    /// Returns the top-most solid row in a column.
    #[must_use]
    pub fn column_top_solid(&self, x: i32) -> Option<i32> {
        self.tiles
            .values()
            .filter(|t| t.coord.x == x && t.solid())
            .map(|t| t.coord.y)
            .min()
    }

    /// Collects all solid tiles whose pixel rect overlaps `rect`.
    ///
    /// Tiles are returned in row-major order (ascending y, then x). Only the
    /// cells the rectangle covers are looked up.
    #[must_use]
    pub fn solid_tiles_overlapping(&self, rect: &Rect, tile_size: u32) -> Vec<Tile> {
        let size = tile_size as f32;
        let min_x = (rect.x / size).floor() as i32;
        let max_x = (rect.right() / size).ceil() as i32;
        let min_y = (rect.y / size).floor() as i32;
        let max_y = (rect.bottom() / size).ceil() as i32;

        let mut hits = Vec::new();
        for y in min_y..max_y {
            for x in min_x..max_x {
                if let Some(tile) = self.tiles.get(&TileCoord::new(x, y)) {
                    if tile.solid() && rect.intersects(&tile.pixel_rect(tile_size)) {
                        hits.push(*tile);
                    }
                }
            }
        }
        hits
    }

    /// Returns true if any solid tile overlaps `rect`.
    #[must_use]
    pub fn any_solid_overlapping(&self, rect: &Rect, tile_size: u32) -> bool {
        !self.solid_tiles_overlapping(rect, tile_size).is_empty()
    }
}

impl FromIterator<Tile> for TileStore {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut store = Self::new();
        for tile in iter {
            store.insert(tile);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(x: i32, y: i32, block: BlockType) -> Tile {
        Tile::new(TileCoord::new(x, y), block)
    }

    #[test]
    fn test_insert_remove() {
        let mut store = TileStore::new();
        assert!(store.is_empty());

        assert!(store.insert(tile(1, 2, BlockType::Dirt)).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.block_at(TileCoord::new(1, 2)), Some(BlockType::Dirt));

        let displaced = store.insert(tile(1, 2, BlockType::Grass));
        assert_eq!(displaced.map(|t| t.block), Some(BlockType::Dirt));
        assert_eq!(store.len(), 1);

        assert!(store.remove(TileCoord::new(1, 2)).is_some());
        assert!(store.remove(TileCoord::new(1, 2)).is_none());
        assert!(!store.contains(TileCoord::new(1, 2)));
    }

    #[test]
    fn test_overlap_query_order_and_solidity() {
        let store: TileStore = [
            tile(0, 0, BlockType::Dirt),
            tile(1, 0, BlockType::FlowerA),
            tile(0, 1, BlockType::Cobblestone),
            tile(1, 1, BlockType::Grass),
        ]
        .into_iter()
        .collect();

        // Covers all four cells.
        let rect = Rect::new(16.0, 16.0, 32.0, 32.0);
        let hits = store.solid_tiles_overlapping(&rect, 32);
        let coords: Vec<_> = hits.iter().map(|t| t.coord).collect();
        assert_eq!(
            coords,
            vec![TileCoord::new(0, 0), TileCoord::new(0, 1), TileCoord::new(1, 1)]
        );
    }

    #[test]
    fn test_touching_rect_has_no_hits() {
        let store: TileStore = [tile(0, 1, BlockType::Dirt)].into_iter().collect();
        let resting = Rect::new(0.0, 0.0, 32.0, 32.0);
        assert!(!store.any_solid_overlapping(&resting, 32));
        assert!(store.any_solid_overlapping(&resting.translated(0.0, 1.0), 32));
    }

    #[test]
    fn test_column_top() {
        let store: TileStore = [
            tile(3, 5, BlockType::Grass),
            tile(3, 4, BlockType::FlowerB),
            tile(3, 9, BlockType::Dirt),
        ]
        .into_iter()
        .collect();
        assert_eq!(store.column_top(3), Some(4));
        assert_eq!(store.column_top_solid(3), Some(5));
        assert_eq!(store.column_top(4), None);
    }
}
