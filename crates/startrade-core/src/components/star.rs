//! Stars on the galaxy map.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{BodyKind, SystemObject, Vec2};
use crate::error::GenerationError;
use crate::generation::populate_system;

/// Stellar classification. Every star is born main-sequence for now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarClass {
    #[default]
    MainSequence,
}

/// A named star and, once explored, the bodies orbiting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub name: String,
    pub coordinates: Vec2,
    pub class: StarClass,
    pub objects: Vec<SystemObject>,
    explored: bool,
}

impl Star {
    pub fn new(name: impl Into<String>, coordinates: Vec2) -> Self {
        Self {
            name: name.into(),
            coordinates,
            class: StarClass::default(),
            objects: Vec::new(),
            explored: false,
        }
    }

    pub fn is_explored(&self) -> bool {
        self.explored
    }

    /// Generate the system's bodies on first visit.
    ///
    /// Returns `Ok(true)` when the system was generated by this call and
    /// `Ok(false)` when it had already been explored (nothing changes).
    pub fn explore(&mut self, rng: &mut impl Rng) -> Result<bool, GenerationError> {
        if self.explored {
            return Ok(false);
        }
        self.objects = populate_system(&self.name, rng)?;
        self.explored = true;
        log::info!(
            "Explored {}: {} bodies ({} populated)",
            self.name,
            self.objects.len(),
            self.populated_count()
        );
        Ok(true)
    }

    pub fn count_of(&self, kind: BodyKind) -> usize {
        self.objects.iter().filter(|o| o.kind == kind).count()
    }

    pub fn populated_count(&self) -> usize {
        self.objects.iter().filter(|o| o.populated).count()
    }
}
