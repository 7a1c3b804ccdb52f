//! # BLOCKFALL Procedural Generation
//!
//! One-shot, deterministic generation of the tile world.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed always produces the same world
//! 2. **Local rules**: Terrain is fixed row offsets from a noisy surface,
//!    O(width × height), no noise library
//! 3. **Total**: Generation never fails for any size or seed
//!
//! ## Pipeline
//!
//! ```text
//! WorldSeed ──> elevation walk ──> per-column layering ──> canopy pass ──> TileStore
//!                                                                       └─> clouds
//! ```
//!
//! ## Example
//!
//! ```rust
//! use blockfall_procedural::{TerrainConfig, TerrainGenerator, WorldSeed};
//!
//! let config = TerrainConfig { width: 32, height: 32, ..TerrainConfig::default() };
//! let world = TerrainGenerator::new(config, WorldSeed::new(42)).generate();
//! assert!(!world.store.is_empty());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod canopy;
pub mod clouds;
pub mod layers;
pub mod seed;
pub mod task;
pub mod terrain;

pub use canopy::grow_canopies;
pub use clouds::{generate_clouds, Cloud, CloudConfig};
pub use layers::LayerRules;
pub use seed::WorldSeed;
pub use task::{GenerationError, GenerationResult, GenerationTask};
pub use terrain::{Cell, GeneratedWorld, TerrainConfig, TerrainGenerator, TerrainGrid};
