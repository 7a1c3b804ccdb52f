//! # BLOCKFALL
//!
//! The main game crate, integrating all systems.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              BLOCKFALL                                  │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────────┐     ┌─────────────────┐     ┌─────────────────┐    │
//! │  │   Procedural    │     │   Core          │     │   Economy       │    │
//! │  │                 │────>│                 │<────│                 │    │
//! │  │  • Terrain      │     │  • Tiles        │     │  • Tools        │    │
//! │  │  • Canopy       │     │  • Tile store   │     │  • Break rules  │    │
//! │  │  • Clouds       │     │  • Rects        │     │  • Inventory    │    │
//! │  └─────────────────┘     └────────┬────────┘     └────────┬────────┘    │
//! │                                   │                       │             │
//! │                          ┌────────▼───────────────────────▼────────┐    │
//! │                          │   Game                                   │    │
//! │                          │  • Collision  • World edit  • View       │    │
//! │                          │  • Player     • Events      • Loop       │    │
//! │                          └──────────────────────────────────────────┘    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: TOML configuration
//! - `events`: Gameplay event bus
//! - `game_loop`: Frame orchestration and timing
//! - `physics`: Tile collision and fall damage
//! - `player`: Movement and stamina
//! - `view`: Camera and render window
//! - `world_edit`: Breaking and placing blocks

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod events;
pub mod game_loop;
pub mod physics;
pub mod player;
pub mod view;
pub mod world_edit;

// Re-export the units
pub use blockfall_core as core;
pub use blockfall_economy as economy;
pub use blockfall_procedural as procedural;

// Re-export commonly used types
pub use config::{ConfigError, ConfigResult, GameConfig};
pub use events::{EventBus, EventReceiver, EventSender, GameEvent};
pub use game_loop::{FrameBudget, FrameInput, FrameReport, FrameStats, GameLoop, GameLoopConfig};
pub use physics::{Body, PhysicsConfig, StepInput, StepOutcome};
pub use player::{MoveIntent, Player, PlayerConfig, Stamina};
pub use view::{Camera, ViewConfig, ViewWindow};
pub use world_edit::{BreakOutcome, Click, EditOutcome, MouseButton, PlaceOutcome, ReachConfig, WorldEditor};
