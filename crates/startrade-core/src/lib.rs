//! startrade core - galaxy generation and world model for a space trading game
//!
//! A galaxy of `size²` stars is scattered over a square map with a minimum
//! spacing, linked by pathways whose odds fall off with distance, and
//! repaired until every star is reachable. Star systems are generated lazily
//! the first time the player visits, and each planet, giant or belt carries a
//! small spiral grid of resource cells.
//!
//! # Architecture
//!
//! - [`components`]: plain data (stars, bodies, surface cells, player)
//! - [`generation`]: procedural generation of all of the above
//! - [`graph`]: the symmetric pathway matrix and BFS helpers
//! - [`camera`]: pan/zoom window and visibility for the map view
//! - [`systems`]: per-tick logic (random encounters)
//! - [`engine`]: the game state that ties it together
//! - [`persistence`]: versioned save files
//!
//! # Example
//!
//! ```rust,no_run
//! use startrade_core::prelude::*;
//!
//! let mut config = GameConfig::default();
//! config.galaxy.seed = Some(42);
//!
//! let mut game = GameEngine::bootstrap(config).expect("failed to build galaxy");
//! let next = game.destinations()[0].name.clone();
//! game.travel_to(&next).unwrap();
//!
//! loop {
//!     for event in game.update(1.0 / 60.0).unwrap() {
//!         println!("{:?}", event);
//!     }
//! }
//! ```

pub mod camera;
pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod galaxy;
pub mod generation;
pub mod graph;
pub mod persistence;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::camera::{Camera, CameraCommand, Visibility};
    pub use crate::components::*;
    pub use crate::config::{GalaxyConfig, GameConfig};
    pub use crate::engine::{GameEngine, GameEvent};
    pub use crate::error::{GameError, GenerationError};
    pub use crate::galaxy::Galaxy;
    pub use crate::generation::NamePool;
}
