//! Galaxy generation - star placement and the pathway graph.
//!
//! Stars are scattered by rejection sampling so no two sit closer than
//! `min_dist`. Pathways are rolled per pair with a probability that decays
//! exponentially with distance, then a repair loop re-rolls pathways for
//! stranded stars until the whole map is reachable.

use rand::Rng;

use crate::components::{Star, Vec2};
use crate::config::GalaxyConfig;
use crate::error::GenerationError;
use crate::graph::Adjacency;

use super::NamePool;

/// Lower bound of star coordinates on both axes.
pub const COORD_MIN: f32 = 0.1;

/// Probability of a pathway between two stars `distance` apart.
///
/// Values above 1 (stars closer than `min_dist`) mean a certain link.
pub fn pathway_probability(distance: f32, config: &GalaxyConfig) -> f32 {
    (-config.alpha * (distance - config.min_dist)).exp()
}

fn roll_pathway(a: Vec2, b: Vec2, config: &GalaxyConfig, rng: &mut impl Rng) -> bool {
    let draw: f32 = rng.gen();
    draw <= pathway_probability(a.distance(&b), config)
}

/// Scatter `size²` named stars over `[0.1, size]²`.
pub fn place_stars(
    config: &GalaxyConfig,
    names: &NamePool,
    rng: &mut impl Rng,
) -> Result<Vec<Star>, GenerationError> {
    let count = config.star_count();
    let names = names.draw(count, rng)?;
    let extent = config.size as f32;
    let min_dist_sq = config.min_dist * config.min_dist;

    let mut stars: Vec<Star> = Vec::with_capacity(count);
    for name in names {
        let mut attempts = 0;
        let coordinates = loop {
            if attempts >= config.max_placement_attempts {
                return Err(GenerationError::PlacementExhausted {
                    placed: stars.len(),
                    attempts,
                });
            }
            attempts += 1;

            let candidate = Vec2::new(
                rng.gen_range(COORD_MIN..=extent),
                rng.gen_range(COORD_MIN..=extent),
            );
            let clear = stars
                .iter()
                .all(|s| s.coordinates.distance_squared(&candidate) >= min_dist_sq);
            if clear {
                break candidate;
            }
        };
        stars.push(Star::new(name, coordinates));
    }

    Ok(stars)
}

/// Roll a pathway for every unordered pair of stars.
pub fn generate_pathways(stars: &[Star], config: &GalaxyConfig, rng: &mut impl Rng) -> Adjacency {
    let mut adjacency = Adjacency::new(stars.len());
    for i in 0..stars.len() {
        for j in (i + 1)..stars.len() {
            if roll_pathway(stars[i].coordinates, stars[j].coordinates, config, rng) {
                adjacency.link(i, j);
            }
        }
    }
    adjacency
}

/// Add pathways until every star is reachable from star 0.
///
/// Each round re-rolls, for every unreached star, the pathway test against
/// every other star it isn't linked to yet. Returns the number of rounds used.
pub fn repair_connectivity(
    adjacency: &mut Adjacency,
    stars: &[Star],
    config: &GalaxyConfig,
    rng: &mut impl Rng,
) -> Result<u32, GenerationError> {
    let total = stars.len();
    let mut reached = adjacency.reachable_from(0);
    let mut rounds = 0;

    while reached.iter().any(|&r| !r) {
        if rounds >= config.max_repair_rounds {
            return Err(GenerationError::ConnectivityRepairExhausted {
                rounds,
                reached: reached.iter().filter(|&&r| r).count(),
                total,
            });
        }
        rounds += 1;

        let stranded: Vec<usize> = (0..total).filter(|&i| !reached[i]).collect();
        log::debug!("Repair round {}: {} stars unreachable", rounds, stranded.len());

        for &i in &stranded {
            for j in 0..total {
                if i == j || adjacency.is_linked(i, j) {
                    continue;
                }
                if roll_pathway(stars[i].coordinates, stars[j].coordinates, config, rng) {
                    adjacency.link(i, j);
                }
            }
        }

        reached = adjacency.reachable_from(0);
    }

    Ok(rounds)
}
