//! Error types for generation, gameplay, configuration and save files.
//!
//! Generation errors are construction-time failures: a galaxy that fails to
//! build is never returned half-made, and the bootstrap should treat them as
//! fatal.

use std::path::PathBuf;

/// Errors raised while building a galaxy, a star system or a surface.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The name corpus holds fewer names than the galaxy has stars.
    #[error("name pool exhausted: {required} stars need names but only {available} are available")]
    ExhaustedNamePool { available: usize, required: usize },

    /// Rejection sampling could not find a free spot for the next star.
    #[error("star placement exhausted: placed {placed} stars, gave up after {attempts} attempts")]
    PlacementExhausted { placed: usize, attempts: u32 },

    /// The repair loop ran out of rounds before every star was reachable.
    #[error("connectivity repair exhausted after {rounds} rounds: {reached}/{total} stars reachable")]
    ConnectivityRepairExhausted {
        rounds: u32,
        reached: usize,
        total: usize,
    },

    /// Requested more surface cells than the spiral layout defines.
    #[error("surface size {requested} exceeds the spiral layout ({max} cells)")]
    InvalidSurfaceSize { requested: usize, max: usize },

    /// A required data file could not be read.
    #[error("missing asset {}: {source}", .path.display())]
    MissingAsset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required data file was read but holds nothing usable.
    #[error("malformed asset {}: {reason}", .path.display())]
    MalformedAsset { path: PathBuf, reason: String },

    /// Configuration values that cannot produce a galaxy.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GenerationError {
    /// True for the failures where generation gave up (name pool or placement).
    pub fn is_exhaustion(&self) -> bool {
        matches!(
            self,
            GenerationError::ExhaustedNamePool { .. } | GenerationError::PlacementExhausted { .. }
        )
    }
}

/// A camera command string that is not one of up/down/left/right/zoom.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown camera command '{0}'")]
pub struct CommandError(pub String);

/// Rejected gameplay commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("no star named '{0}'")]
    UnknownStar(String),

    #[error("no pathway between {from} and {to}")]
    NoPathway { from: String, to: String },

    #[error("already docked at {0}")]
    AlreadyThere(String),

    #[error("ship is travelling")]
    Traveling,

    #[error("no body {0} in this system")]
    UnknownBody(usize),

    #[error("body {body} has no cell {cell}")]
    UnknownCell { body: usize, cell: usize },

    #[error("cell {cell} of body {body} holds no resource")]
    EmptyCell { body: usize, cell: usize },

    #[error("cargo hold full ({capacity} units)")]
    CargoFull { capacity: u32 },
}

/// Errors reading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur during save/load.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}
