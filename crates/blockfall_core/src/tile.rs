//! # Tiles
//!
//! A tile is one occupied grid cell. The world is a 2-D grid of
//! `tile_size`-pixel squares; row indices grow downward.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 32;

/// Every block that can occupy a cell.
///
/// There is deliberately no air variant: air is the absence of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BlockType {
    /// Dirt, the three layers under the surface.
    Dirt = 0,
    /// Grass, the surface row.
    Grass = 1,
    /// Cobblestone.
    Cobblestone = 2,
    /// Tree trunk.
    Wood = 3,
    /// Tree canopy.
    Leaves = 4,
    /// Granite (deep layer).
    Granite = 5,
    /// Andesite (deep layer).
    Andesite = 6,
    /// Gem ore (rare, deep layer).
    Gem = 7,
    /// First flower variant (decorative, pass-through).
    FlowerA = 8,
    /// Second flower variant (decorative, pass-through).
    FlowerB = 9,
    /// Hazard ("bomb") decoration (pass-through).
    Hazard = 10,
}

impl BlockType {
    /// All block types, in id order.
    pub const ALL: [BlockType; 11] = [
        Self::Dirt,
        Self::Grass,
        Self::Cobblestone,
        Self::Wood,
        Self::Leaves,
        Self::Granite,
        Self::Andesite,
        Self::Gem,
        Self::FlowerA,
        Self::FlowerB,
        Self::Hazard,
    ];

    /// Returns true if this block stops movement.
    ///
    /// Flowers and the hazard block are pass-through.
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        !matches!(self, Self::FlowerA | Self::FlowerB | Self::Hazard)
    }

    /// Stable lowercase name (matches the config spelling).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dirt => "dirt",
            Self::Grass => "grass",
            Self::Cobblestone => "cobblestone",
            Self::Wood => "wood",
            Self::Leaves => "leaves",
            Self::Granite => "granite",
            Self::Andesite => "andesite",
            Self::Gem => "gem",
            Self::FlowerA => "flower_a",
            Self::FlowerB => "flower_b",
            Self::Hazard => "hazard",
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Integer grid coordinate of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    /// Column.
    pub x: i32,
    /// Row (grows downward).
    pub y: i32,
}

impl TileCoord {
    /// Creates a new tile coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts a pixel position to the tile containing it.
    ///
    /// Floors toward negative infinity, so `-1` px lands in tile `-1`.
    #[inline]
    #[must_use]
    pub fn from_pixel(px: f32, py: f32, tile_size: u32) -> Self {
        let size = tile_size as f32;
        Self {
            x: (px / size).floor() as i32,
            y: (py / size).floor() as i32,
        }
    }

    /// Returns this coordinate moved by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Top-left pixel of this tile.
    #[inline]
    #[must_use]
    pub fn to_pixel(self, tile_size: u32) -> [f32; 2] {
        let size = tile_size as f32;
        [self.x as f32 * size, self.y as f32 * size]
    }
}

impl std::fmt::Display for TileCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single occupied cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Where the tile is.
    pub coord: TileCoord,
    /// What occupies it.
    pub block: BlockType,
}

impl Tile {
    /// Creates a new tile.
    #[inline]
    #[must_use]
    pub const fn new(coord: TileCoord, block: BlockType) -> Self {
        Self { coord, block }
    }

    /// Returns true if this tile blocks movement.
    #[inline]
    #[must_use]
    pub const fn solid(&self) -> bool {
        self.block.is_solid()
    }

    /// The pixel rectangle this tile covers.
    #[inline]
    #[must_use]
    pub fn pixel_rect(&self, tile_size: u32) -> Rect {
        let [x, y] = self.coord.to_pixel(tile_size);
        let size = tile_size as f32;
        Rect::new(x, y, size, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solidity() {
        for block in BlockType::ALL {
            let expected = !matches!(
                block,
                BlockType::FlowerA | BlockType::FlowerB | BlockType::Hazard
            );
            assert_eq!(block.is_solid(), expected, "{block}");
        }
    }

    #[test]
    fn test_coord_from_pixel_floors() {
        assert_eq!(TileCoord::from_pixel(0.0, 0.0, 32), TileCoord::new(0, 0));
        assert_eq!(TileCoord::from_pixel(31.9, 63.9, 32), TileCoord::new(0, 1));
        assert_eq!(TileCoord::from_pixel(-1.0, -32.0, 32), TileCoord::new(-1, -1));
        assert_eq!(TileCoord::from_pixel(-33.0, 32.0, 32), TileCoord::new(-2, 1));
    }

    #[test]
    fn test_tile_pixel_rect() {
        let tile = Tile::new(TileCoord::new(-2, 3), BlockType::Dirt);
        let rect = tile.pixel_rect(32);
        assert_eq!(rect, Rect::new(-64.0, 96.0, 32.0, 32.0));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = BlockType::ALL.iter().map(|b| b.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BlockType::ALL.len());
    }
}
