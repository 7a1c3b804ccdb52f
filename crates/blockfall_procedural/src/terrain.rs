//! # Terrain Generator
//!
//! Builds the whole world in one batch:
//!
//! 1. **Elevation** - a surface row per column, random walk from `height / 2`
//!    with steps in {-1, 0, +1}. Unclamped.
//! 2. **Layering** - each column is classified top to bottom from fixed
//!    offsets relative to its surface (see [`crate::layers`]).
//! 3. **Canopy** - leaves around the first trunk of every column
//!    (see [`crate::canopy`]).
//! 4. **Materialisation** - every non-air cell becomes a [`Tile`], shifted so
//!    the world is centered on the origin.
//!
//! Cost is O(width × height). Generation is total: any size and any seed
//! produce a world.

use std::time::Instant;

use blockfall_core::{BlockType, Tile, TileCoord, TileStore, DEFAULT_TILE_SIZE};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::canopy::grow_canopies;
use crate::clouds::{generate_clouds, Cloud, CloudConfig};
use crate::layers::{LayerRules, DIRT_DEPTH, SHALLOW_STONE_DEPTH, TRUNK_START_OFFSET};
use crate::seed::{WorldSeed, CLOUD_STREAM, TERRAIN_STREAM};

/// Default world width in columns.
pub const DEFAULT_WORLD_WIDTH: u32 = 200;

/// Default world height in rows.
pub const DEFAULT_WORLD_HEIGHT: u32 = 200;

/// World size and shape parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Columns.
    pub width: u32,
    /// Rows.
    pub height: u32,
    /// Tile edge length in pixels.
    pub tile_size: u32,
    /// Layering probabilities.
    pub layers: LayerRules,
    /// Decorative cloud layer.
    pub clouds: CloudConfig,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WORLD_WIDTH,
            height: DEFAULT_WORLD_HEIGHT,
            tile_size: DEFAULT_TILE_SIZE,
            layers: LayerRules::default(),
            clouds: CloudConfig::default(),
        }
    }
}

/// One cell of the generation grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    /// Empty.
    #[default]
    Air,
    /// Occupied by a block.
    Block(BlockType),
}

impl Cell {
    /// Returns true for air.
    #[inline]
    #[must_use]
    pub const fn is_air(self) -> bool {
        matches!(self, Self::Air)
    }

    /// Returns the block, if any.
    #[inline]
    #[must_use]
    pub const fn block(self) -> Option<BlockType> {
        match self {
            Self::Air => None,
            Self::Block(block) => Some(block),
        }
    }
}

/// Dense classification grid, used only during generation.
///
/// Indexed `[row][column]` internally; rows grow downward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl TerrainGrid {
    /// Creates an all-air grid.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Air; width * height],
        }
    }

    /// Columns.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Gets a cell. Out-of-range reads are air.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            Cell::Air
        }
    }

    /// Sets a cell. Out-of-range writes are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    /// Iterates over `(x, y, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i % self.width, i / self.width, *cell))
    }

    /// Number of non-air cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_air()).count()
    }
}

/// Everything one generation run produces.
#[derive(Clone, Debug)]
pub struct GeneratedWorld {
    /// The populated tile store.
    pub store: TileStore,
    /// Surface row per grid column (grid space, before centering).
    pub surface: Vec<i32>,
    /// Decorative clouds (screen space).
    pub clouds: Vec<Cloud>,
}

/// Seeded one-shot terrain generator.
#[derive(Clone, Debug)]
pub struct TerrainGenerator {
    config: TerrainConfig,
    seed: WorldSeed,
}

impl TerrainGenerator {
    /// Creates a new generator.
    #[must_use]
    pub fn new(config: TerrainConfig, seed: WorldSeed) -> Self {
        Self { config, seed }
    }

    /// The configuration this generator runs with.
    #[must_use]
    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// The seed this generator runs with.
    #[must_use]
    pub fn seed(&self) -> WorldSeed {
        self.seed
    }

    /// Runs the full pipeline.
    #[must_use]
    pub fn generate(&self) -> GeneratedWorld {
        let start = Instant::now();

        let (mut grid, surface) = self.classify();
        grow_canopies(&mut grid);
        let store = self.materialize(&grid);

        let mut cloud_rng = self.seed.stream(CLOUD_STREAM);
        let clouds = generate_clouds(&self.config.clouds, &mut cloud_rng);

        tracing::info!(
            seed = self.seed.value(),
            width = self.config.width,
            height = self.config.height,
            tiles = store.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "terrain generated"
        );

        GeneratedWorld {
            store,
            surface,
            clouds,
        }
    }

    /// Runs elevation and layering, returning the grid before canopy.
    ///
    /// Also returns the surface row of every column.
    #[must_use]
    pub fn classify(&self) -> (TerrainGrid, Vec<i32>) {
        let width = self.config.width as usize;
        let height = self.config.height as usize;
        let mut grid = TerrainGrid::new(width, height);
        let mut surface = Vec::with_capacity(width);
        let mut rng = self.seed.stream(TERRAIN_STREAM);

        let mut surface_row = (height / 2) as i32;
        for x in 0..width {
            if x > 0 {
                surface_row += rng.gen_range(-1..=1);
            }
            surface.push(surface_row);
            self.classify_column(&mut grid, &mut rng, x, surface_row);
        }

        tracing::debug!(columns = width, occupied = grid.occupied(), "layering done");
        (grid, surface)
    }

    /// Classifies one column, top row first.
    fn classify_column(&self, grid: &mut TerrainGrid, rng: &mut ChaCha8Rng, x: usize, surface: i32) {
        let rules = &self.config.layers;

        for y in 0..grid.height() {
            let row = y as i32;
            let above = if y > 0 { grid.get(x, y - 1) } else { Cell::Air };

            let block = if above == Cell::Block(BlockType::Wood) && row < surface {
                // Trunk grows down from its start row to the grass.
                Some(BlockType::Wood)
            } else if row == surface - TRUNK_START_OFFSET {
                (rng.gen::<f64>() < rules.tree_chance).then_some(BlockType::Wood)
            } else if row < surface {
                None
            } else if row == surface {
                if y > 0 && above != Cell::Block(BlockType::Wood) {
                    if let Some(decoration) = Self::decoration(rules, rng) {
                        grid.set(x, y - 1, Cell::Block(decoration));
                    }
                }
                Some(BlockType::Grass)
            } else if row <= surface + DIRT_DEPTH {
                Some(BlockType::Dirt)
            } else if row <= surface + DIRT_DEPTH + SHALLOW_STONE_DEPTH {
                Some(rules.shallow_block(rng.gen()))
            } else {
                Some(rules.deep_block(rng.gen()))
            };

            grid.set(x, y, block.map_or(Cell::Air, Cell::Block));
        }
    }

    /// Draws the decoration for the cell above a grass tile.
    ///
    /// The hazard draw only happens when the flower draw fails.
    fn decoration(rules: &LayerRules, rng: &mut ChaCha8Rng) -> Option<BlockType> {
        if rng.gen::<f64>() < rules.flower_chance {
            if rng.gen::<f64>() < 0.5 {
                Some(BlockType::FlowerA)
            } else {
                Some(BlockType::FlowerB)
            }
        } else if rng.gen::<f64>() < rules.hazard_chance {
            Some(BlockType::Hazard)
        } else {
            None
        }
    }

    /// Converts every non-air cell into a centered tile.
    #[must_use]
    pub fn materialize(&self, grid: &TerrainGrid) -> TileStore {
        let half_w = (grid.width() / 2) as i32;
        let half_h = (grid.height() / 2) as i32;

        let mut store = TileStore::with_capacity(grid.occupied());
        for (x, y, cell) in grid.iter() {
            if let Some(block) = cell.block() {
                let coord = TileCoord::new(x as i32 - half_w, y as i32 - half_h);
                store.insert(Tile::new(coord, block));
            }
        }
        store
    }
}
