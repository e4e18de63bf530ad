//! Game configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes. Files are JSON:
//!
//! ```json
//! { "galaxy": { "size": 5, "seed": 42 }, "travel_speed": 0.5 }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GenerationError};

/// Minimum distance between two stars, in galaxy units.
pub const MIN_DIST: f32 = 0.5;

/// Decay rate of pathway probability with distance.
pub const ALPHA: f32 = 1.0;

/// Parameters for galaxy generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    /// Side length of the galaxy; the star count is `size²`.
    pub size: u32,
    /// Minimum separation between stars.
    pub min_dist: f32,
    /// Pathway probability decay: `P = exp(-alpha * (d - min_dist))`.
    pub alpha: f32,
    /// Rejected samples allowed per star before placement gives up.
    pub max_placement_attempts: u32,
    /// Repair rounds allowed before the graph is declared unrepairable.
    pub max_repair_rounds: u32,
    /// Fixed seed for reproducible worlds. `None` picks a fresh one.
    pub seed: Option<u64>,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            size: 4,
            min_dist: MIN_DIST,
            alpha: ALPHA,
            max_placement_attempts: 10_000,
            max_repair_rounds: 1_000,
            seed: None,
        }
    }
}

impl GalaxyConfig {
    /// Number of stars this configuration produces.
    pub fn star_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.size == 0 {
            return Err(GenerationError::InvalidConfig(
                "galaxy size must be at least 1".into(),
            ));
        }
        positive_finite("min_dist", self.min_dist)?;
        positive_finite("alpha", self.alpha)?;
        if self.max_placement_attempts == 0 || self.max_repair_rounds == 0 {
            return Err(GenerationError::InvalidConfig(
                "attempt bounds must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Floats from JSON can overflow to infinity, so reject those along with
/// zero, negatives and NaN.
fn positive_finite(name: &str, value: f32) -> Result<(), GenerationError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(GenerationError::InvalidConfig(format!(
            "{} must be a positive finite number, got {}",
            name, value
        )))
    }
}

/// Map camera tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Pan distance as a fraction of the current zoom span.
    pub pan_step: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { pan_step: 0.1 }
    }
}

/// Random encounter timing while travelling. Intervals are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    pub min_interval: f32,
    pub max_interval: f32,
    /// Number of distinct encounters the dialogue layer knows about.
    pub event_count: u32,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            min_interval: 20.0,
            max_interval: 60.0,
            event_count: 1,
        }
    }
}

/// Top-level configuration for a game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub galaxy: GalaxyConfig,
    pub camera: CameraConfig,
    pub events: EventConfig,
    /// Ship speed in galaxy units per second.
    pub travel_speed: f32,
    /// Cargo hold size in resource units.
    pub cargo_capacity: u32,
    /// Newline-delimited star name corpus.
    pub names_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            galaxy: GalaxyConfig::default(),
            camera: CameraConfig::default(),
            events: EventConfig::default(),
            travel_speed: 0.25,
            cargo_capacity: 100,
            names_path: PathBuf::from("data/star_names.txt"),
        }
    }
}

impl GameConfig {
    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        self.galaxy.validate()?;
        positive_finite("camera pan_step", self.camera.pan_step)?;
        positive_finite("travel_speed", self.travel_speed)?;
        let ev = &self.events;
        positive_finite("event min_interval", ev.min_interval)?;
        positive_finite("event max_interval", ev.max_interval)?;
        if ev.min_interval > ev.max_interval {
            return Err(GenerationError::InvalidConfig(format!(
                "event interval [{}, {}] is not a valid range",
                ev.min_interval, ev.max_interval
            )));
        }
        if ev.event_count == 0 {
            return Err(GenerationError::InvalidConfig(
                "event_count must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
