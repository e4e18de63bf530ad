//! Save/Load functionality for persisting a game
//!
//! Uses bincode for a compact binary snapshot of the whole game, including
//! the random generator, so a loaded game continues exactly as the saved
//! one would have.

use std::io::{Read, Write};

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::components::Player;
use crate::config::GameConfig;
use crate::engine::GameEngine;
use crate::error::SaveError;
use crate::galaxy::Galaxy;
use crate::systems::EventScheduler;

/// Version number for save file format (increment when format changes)
pub const SAVE_VERSION: u32 = 1;

/// Serializable snapshot of the game
#[derive(Serialize, Deserialize)]
pub struct SaveData {
    /// Save format version
    pub version: u32,
    pub config: GameConfig,
    pub seed: u64,
    pub clock: f64,
    pub galaxy: Galaxy,
    pub player: Player,
    pub events: EventScheduler,
    pub rng: ChaCha8Rng,
}

/// Save the complete game to a writer
pub fn save_game<W: Write>(writer: W, engine: &GameEngine) -> Result<(), SaveError> {
    let save_data = SaveData {
        version: SAVE_VERSION,
        config: engine.config.clone(),
        seed: engine.seed,
        clock: engine.clock,
        galaxy: engine.galaxy.clone(),
        player: engine.player.clone(),
        events: engine.events.clone(),
        rng: engine.rng.clone(),
    };

    bincode::serialize_into(writer, &save_data)?;
    Ok(())
}

/// Load a game from a reader
pub fn load_game<R: Read>(reader: R) -> Result<GameEngine, SaveError> {
    let save_data: SaveData = bincode::deserialize_from(reader)?;

    if save_data.version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: SAVE_VERSION,
            found: save_data.version,
        });
    }

    Ok(GameEngine {
        config: save_data.config,
        seed: save_data.seed,
        galaxy: save_data.galaxy,
        player: save_data.player,
        events: save_data.events,
        rng: save_data.rng,
        clock: save_data.clock,
    })
}
