//! The galaxy map: stars, the pathways between them, and the map camera.

use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, CameraCommand, Visibility};
use crate::components::Star;
use crate::config::{CameraConfig, GalaxyConfig};
use crate::error::GenerationError;
use crate::generation::{generate_pathways, place_stars, repair_connectivity, NamePool};
use crate::graph::Adjacency;

/// Every star in the game and how they connect.
///
/// Stars are addressed by stable integer IDs (their position in generation
/// order). Name lookups go through an index built alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Galaxy {
    size: u32,
    stars: Vec<Star>,
    index: HashMap<String, usize>,
    adjacency: Adjacency,
    pub camera: Camera,
}

impl Galaxy {
    /// Generate a complete, connected galaxy.
    ///
    /// Either returns a galaxy satisfying every map invariant or fails
    /// without producing anything.
    pub fn generate(
        config: &GalaxyConfig,
        camera: &CameraConfig,
        names: &NamePool,
        rng: &mut impl Rng,
    ) -> Result<Self, GenerationError> {
        config.validate()?;

        let stars = place_stars(config, names, rng)?;
        let mut adjacency = generate_pathways(&stars, config, rng);
        let initial_edges = adjacency.edge_count();
        let rounds = repair_connectivity(&mut adjacency, &stars, config, rng)?;

        log::info!(
            "Generated galaxy: {} stars, {} pathways ({} added by {} repair rounds)",
            stars.len(),
            adjacency.edge_count(),
            adjacency.edge_count() - initial_edges,
            rounds
        );

        Ok(Self::from_parts(config.size, stars, adjacency, camera))
    }

    /// Assemble a galaxy from already generated stars and pathways.
    pub fn from_parts(size: u32, stars: Vec<Star>, adjacency: Adjacency, camera: &CameraConfig) -> Self {
        let index = stars
            .iter()
            .enumerate()
            .map(|(id, s)| (s.name.clone(), id))
            .collect();
        Self {
            size,
            stars,
            index,
            adjacency,
            camera: Camera::new(size, camera.pan_step),
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Stars in generation order; the slice index is the star ID.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn star(&self, id: usize) -> Option<&Star> {
        self.stars.get(id)
    }

    pub fn star_mut(&mut self, id: usize) -> Option<&mut Star> {
        self.stars.get_mut(id)
    }

    pub fn star_id(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn star_by_name(&self, name: &str) -> Option<&Star> {
        self.star_id(name).and_then(|id| self.stars.get(id))
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    pub fn neighbors(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.neighbors(id)
    }

    pub fn is_linked(&self, a: usize, b: usize) -> bool {
        self.adjacency.is_linked(a, b)
    }

    /// Straight-line distance between two stars.
    pub fn distance(&self, a: usize, b: usize) -> Option<f32> {
        let a = self.stars.get(a)?;
        let b = self.stars.get(b)?;
        Some(a.coordinates.distance(&b.coordinates))
    }

    /// Fewest-jumps route between two stars, both ends included.
    pub fn route(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        self.adjacency.shortest_path(from, to)
    }

    /// Generate a star's system if this is the first visit.
    ///
    /// Returns `Ok(true)` when the system was generated now.
    pub fn explore(&mut self, id: usize, rng: &mut impl Rng) -> Result<bool, GenerationError> {
        match self.stars.get_mut(id) {
            Some(star) => star.explore(rng),
            None => Ok(false),
        }
    }

    pub fn move_camera(&mut self, command: CameraCommand) {
        self.camera.apply(command);
    }

    /// Stars and pathways inside the camera window.
    pub fn select_visible_star(&self) -> Visibility {
        self.camera.select_visible(&self.stars, &self.adjacency)
    }
}
