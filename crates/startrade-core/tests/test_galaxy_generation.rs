//! Integration tests for the full galaxy generation pipeline.
//!
//! Exercises: NamePool → Galaxy (placement, pathways, repair) → Star
//! exploration → surfaces → camera visibility → game engine.
//!
//! All tests are seeded, so failures reproduce.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use startrade_core::camera::CameraCommand;
use startrade_core::components::BodyKind;
use startrade_core::config::{CameraConfig, GalaxyConfig, GameConfig};
use startrade_core::engine::GameEngine;
use startrade_core::galaxy::Galaxy;
use startrade_core::generation::NamePool;

// ── Helpers ────────────────────────────────────────────────────────────

const STAR_NAMES: &str = include_str!("../../../data/star_names.txt");

fn corpus() -> NamePool {
    NamePool::from_names(STAR_NAMES.lines())
}

fn generate(config: &GalaxyConfig, seed: u64) -> Galaxy {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Galaxy::generate(config, &CameraConfig::default(), &corpus(), &mut rng)
        .unwrap_or_else(|e| panic!("seed {} failed: {}", seed, e))
}

// ── Map invariants ─────────────────────────────────────────────────────

#[test]
fn corpus_covers_default_galaxy() {
    assert!(corpus().len() >= GalaxyConfig::default().star_count());
}

#[test]
fn size_four_has_sixteen_stars() {
    let galaxy = generate(&GalaxyConfig::default(), 0);
    assert_eq!(galaxy.len(), 16);
}

#[test]
fn adjacency_symmetric_and_zero_diagonal() {
    for seed in 0..50 {
        let galaxy = generate(&GalaxyConfig::default(), seed);
        let adj = galaxy.adjacency();
        for i in 0..galaxy.len() {
            assert!(!adj.is_linked(i, i));
            for j in 0..galaxy.len() {
                assert_eq!(adj.is_linked(i, j), adj.is_linked(j, i));
            }
        }
    }
}

#[test]
fn repeated_runs_always_connected() {
    let config = GalaxyConfig::default();
    let failures = (0..200)
        .filter(|&seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            match Galaxy::generate(&config, &CameraConfig::default(), &corpus(), &mut rng) {
                Ok(galaxy) => !galaxy.adjacency().is_connected(),
                Err(_) => true,
            }
        })
        .count();
    assert_eq!(failures, 0);
}

#[test]
fn connected_from_every_star() {
    let galaxy = generate(&GalaxyConfig::default(), 17);
    for start in 0..galaxy.len() {
        assert!(galaxy.adjacency().reachable_from(start).iter().all(|&r| r));
    }
}

#[test]
fn stars_respect_min_distance() {
    for size in [2, 4, 6] {
        let config = GalaxyConfig {
            size,
            ..Default::default()
        };
        for seed in 0..20 {
            let galaxy = generate(&config, seed);
            let stars = galaxy.stars();
            for i in 0..stars.len() {
                for j in (i + 1)..stars.len() {
                    let d = stars[i].coordinates.distance(&stars[j].coordinates);
                    assert!(d >= config.min_dist, "size {} seed {}: {} < {}", size, seed, d, config.min_dist);
                }
            }
        }
    }
}

#[test]
fn names_unique_and_from_corpus() {
    let pool: std::collections::HashSet<&str> = STAR_NAMES.lines().map(str::trim).collect();
    let galaxy = generate(&GalaxyConfig::default(), 5);
    let names: std::collections::HashSet<_> = galaxy.stars().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names.len(), galaxy.len());
    assert!(names.iter().all(|n| pool.contains(n)));
}

#[test]
fn oversized_galaxy_exhausts_name_pool() {
    let config = GalaxyConfig {
        size: 20,
        ..Default::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let err = Galaxy::generate(&config, &CameraConfig::default(), &corpus(), &mut rng).unwrap_err();
    assert!(err.is_exhaustion());
}

// ── Determinism ────────────────────────────────────────────────────────

#[test]
fn same_seed_same_galaxy() {
    let config = GalaxyConfig::default();
    assert_eq!(generate(&config, 99), generate(&config, 99));
}

#[test]
fn same_seed_same_surfaces() {
    let explore_all = |seed| {
        let mut galaxy = generate(&GalaxyConfig::default(), seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed + 1);
        for id in 0..galaxy.len() {
            galaxy.explore(id, &mut rng).unwrap();
        }
        galaxy
    };
    assert_eq!(explore_all(3), explore_all(3));
}

#[test]
fn different_seeds_differ() {
    let config = GalaxyConfig::default();
    assert_ne!(generate(&config, 1), generate(&config, 2));
}

// ── Exploration & surfaces ─────────────────────────────────────────────

#[test]
fn explored_surfaces_within_ranges() {
    for seed in 0..10 {
        let mut galaxy = generate(&GalaxyConfig::default(), seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for id in 0..galaxy.len() {
            galaxy.explore(id, &mut rng).unwrap();
        }

        for star in galaxy.stars() {
            assert!(star.is_explored());
            assert!(star.count_of(BodyKind::RockyPlanet) <= 11);
            for body in &star.objects {
                let (min, max) = body.kind.size_range();
                assert!(body.size() >= min && body.size() <= max);
                if body.populated {
                    assert!(body.grid[0].is_settlement());
                }
                assert!(body.grid.iter().skip(1).all(|sq| !sq.is_settlement()));
                assert!(body.name.starts_with(&star.name));
            }
        }
    }
}

#[test]
fn rocky_and_belt_size_bounds() {
    let mut galaxy = generate(
        &GalaxyConfig {
            size: 8,
            ..Default::default()
        },
        21,
    );
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    for id in 0..galaxy.len() {
        galaxy.explore(id, &mut rng).unwrap();
    }
    for body in galaxy.stars().iter().flat_map(|s| &s.objects) {
        match body.kind {
            BodyKind::RockyPlanet => assert!((2..=5).contains(&body.size())),
            BodyKind::AsteroidBelt => assert!((1..=3).contains(&body.size())),
            _ => {}
        }
    }
}

// ── Camera ─────────────────────────────────────────────────────────────

#[test]
fn camera_right_pan_clamps() {
    let mut galaxy = generate(&GalaxyConfig::default(), 0);
    assert_eq!(galaxy.camera.zoom_level(), 1);
    assert_eq!(galaxy.camera.current_zoom(), 4.0);

    for level in 0..3 {
        for _ in 0..200 {
            galaxy.move_camera(CameraCommand::Right);
            let max = galaxy.size() as f32 - galaxy.camera.current_zoom();
            assert!(galaxy.camera.position().x <= max, "level {}", level);
        }
        galaxy.move_camera(CameraCommand::Zoom);
    }
}

#[test]
fn visible_edges_are_real_edges() {
    let mut galaxy = generate(&GalaxyConfig::default(), 8);
    galaxy.move_camera(CameraCommand::Zoom);
    for _ in 0..5 {
        galaxy.move_camera(CameraCommand::Up);
        galaxy.move_camera(CameraCommand::Right);
        let vis = galaxy.select_visible_star();
        for (a, b) in vis.edges.edges() {
            assert!(vis.stars[a] && vis.stars[b]);
            assert!(galaxy.is_linked(a, b));
        }
        for (a, b) in galaxy.adjacency().edges() {
            assert_eq!(vis.edges.is_linked(a, b), vis.stars[a] && vis.stars[b]);
        }
    }
}

// ── Engine ─────────────────────────────────────────────────────────────

#[test]
fn engine_bootstraps_from_corpus_file() {
    let mut config = GameConfig::default();
    config.galaxy.seed = Some(7);
    config.names_path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/star_names.txt").into();

    let engine = GameEngine::bootstrap(config).unwrap();
    assert_eq!(engine.galaxy().len(), 16);
    assert!(engine.current_star().unwrap().is_explored());
}

#[test]
fn engine_missing_corpus_is_fatal() {
    let mut config = GameConfig::default();
    config.names_path = "/nonexistent/star_names.txt".into();
    assert!(GameEngine::bootstrap(config).is_err());
}

#[test]
fn example_config_parses() {
    let config = GameConfig::from_json(include_str!("../../../data/galaxy.json")).unwrap();
    assert_eq!(config.galaxy.seed, Some(42));
    assert!(config.validate().is_ok());
}
