//! startrade Headless Validation Harness
//!
//! Generates many galaxies and checks the map, exploration, camera and
//! save-file invariants. Runs entirely in-process, no rendering.
//!
//! Usage:
//!   cargo run -p startrade-simtest
//!   cargo run -p startrade-simtest -- --trials 500 --verbose
//!   RUST_LOG=debug cargo run -p startrade-simtest -- --trials 5

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use startrade_core::camera::CameraCommand;
use startrade_core::components::{BodyKind, Vec2};
use startrade_core::config::GameConfig;
use startrade_core::engine::GameEngine;
use startrade_core::galaxy::Galaxy;
use startrade_core::generation::NamePool;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "startrade-simtest")]
#[command(about = "Validate galaxy generation over many seeded trials")]
struct Cli {
    /// Number of galaxies to generate
    #[arg(short, long, default_value_t = 100)]
    trials: u64,

    /// First seed; trial i uses seed + i
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// JSON game config (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Star name corpus, overriding the config
    #[arg(short, long)]
    names: Option<PathBuf>,

    /// Print passing checks too
    #[arg(short, long)]
    verbose: bool,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    println!("=== startrade Validation Harness ===\n");

    let mut config = match &cli.config {
        Some(path) => match GameConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(2);
            }
        },
        None => GameConfig::default(),
    };
    if let Some(names) = &cli.names {
        config.names_path = names.clone();
    }

    let names = match NamePool::load(&config.names_path) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    log::info!(
        "{} star names from {}",
        names.len(),
        config.names_path.display()
    );

    let mut results = Vec::new();

    // 1. Map invariants over many seeds
    results.extend(validate_galaxies(&config, &names, &cli));

    // 2. Exploration and surfaces
    results.extend(validate_exploration(&config, &names, &cli));

    // 3. Determinism
    results.extend(validate_determinism(&config, &names, cli.seed));

    // 4. Camera
    results.extend(validate_camera(&config, &names, cli.seed));

    // 5. Engine and save files
    results.extend(validate_engine(&config, &names, cli.seed));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || cli.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn generate(config: &GameConfig, names: &NamePool, seed: u64) -> Result<Galaxy, String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Galaxy::generate(&config.galaxy, &config.camera, names, &mut rng).map_err(|e| e.to_string())
}

// ── 1. Map Invariants ───────────────────────────────────────────────────

fn validate_galaxies(config: &GameConfig, names: &NamePool, cli: &Cli) -> Vec<TestResult> {
    println!("--- Galaxy Generation ({} trials) ---", cli.trials);
    let mut results = Vec::new();

    let mut errors = Vec::new();
    let mut wrong_count = 0;
    let mut asymmetric = 0;
    let mut self_linked = 0;
    let mut disconnected = 0;
    let mut too_close = 0;
    let mut duplicate_names = 0;
    let mut edge_total = 0;

    let expected = config.galaxy.star_count();
    let min_dist = config.galaxy.min_dist;

    for seed in cli.seed..cli.seed + cli.trials {
        let galaxy = match generate(config, names, seed) {
            Ok(g) => g,
            Err(e) => {
                errors.push(format!("seed {}: {}", seed, e));
                continue;
            }
        };
        let adj = galaxy.adjacency();
        let n = galaxy.len();
        edge_total += adj.edge_count();

        if n != expected {
            wrong_count += 1;
        }
        if (0..n).any(|i| adj.is_linked(i, i)) {
            self_linked += 1;
        }
        if (0..n).any(|i| (0..n).any(|j| adj.is_linked(i, j) != adj.is_linked(j, i))) {
            asymmetric += 1;
        }
        if !adj.is_connected() {
            disconnected += 1;
        }
        let stars = galaxy.stars();
        let close = (0..n).any(|i| {
            ((i + 1)..n).any(|j| stars[i].coordinates.distance(&stars[j].coordinates) < min_dist)
        });
        if close {
            too_close += 1;
        }
        let unique: HashSet<_> = stars.iter().map(|s| &s.name).collect();
        if unique.len() != n {
            duplicate_names += 1;
        }
    }

    results.push(TestResult {
        name: "galaxy_generates".into(),
        passed: errors.is_empty(),
        detail: if errors.is_empty() {
            format!("{} galaxies generated", cli.trials)
        } else {
            format!("{} failures, first: {}", errors.len(), errors[0])
        },
    });
    results.push(TestResult {
        name: "galaxy_star_count".into(),
        passed: wrong_count == 0,
        detail: format!("expected {} stars, {} galaxies wrong", expected, wrong_count),
    });
    results.push(TestResult {
        name: "adjacency_symmetric".into(),
        passed: asymmetric == 0,
        detail: format!("{} asymmetric matrices", asymmetric),
    });
    results.push(TestResult {
        name: "adjacency_zero_diagonal".into(),
        passed: self_linked == 0,
        detail: format!("{} matrices with self-links", self_linked),
    });
    results.push(TestResult {
        name: "graph_connected".into(),
        passed: disconnected == 0,
        detail: format!("{} disconnected graphs", disconnected),
    });
    results.push(TestResult {
        name: "stars_min_distance".into(),
        passed: too_close == 0,
        detail: format!("{} galaxies with stars closer than {}", too_close, min_dist),
    });
    results.push(TestResult {
        name: "star_names_unique".into(),
        passed: duplicate_names == 0,
        detail: format!("{} galaxies with repeated names", duplicate_names),
    });

    let generated = cli.trials as usize - errors.len();
    if generated > 0 {
        println!(
            "  avg pathways per galaxy: {:.1}",
            edge_total as f64 / generated as f64
        );
    }

    results
}

// ── 2. Exploration & Surfaces ───────────────────────────────────────────

fn validate_exploration(config: &GameConfig, names: &NamePool, cli: &Cli) -> Vec<TestResult> {
    println!("--- Exploration & Surfaces ---");
    let mut results = Vec::new();

    let mut bodies = 0usize;
    let mut bad_size = 0usize;
    let mut bad_settlement = 0usize;
    let mut too_many_rocky = 0usize;
    let mut not_idempotent = 0usize;
    let mut counts = [0usize; 4];

    let trials = cli.trials.min(50);
    for seed in cli.seed..cli.seed + trials {
        let Ok(mut galaxy) = generate(config, names, seed) else {
            continue;
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for id in 0..galaxy.len() {
            if galaxy.explore(id, &mut rng).is_err() {
                not_idempotent += 1;
                continue;
            }
            let before = galaxy.star(id).map(|s| s.objects.clone());
            if !matches!(galaxy.explore(id, &mut rng), Ok(false)) {
                not_idempotent += 1;
            }
            if before != galaxy.star(id).map(|s| s.objects.clone()) {
                not_idempotent += 1;
            }
        }

        for star in galaxy.stars() {
            if star.count_of(BodyKind::RockyPlanet) > 11 {
                too_many_rocky += 1;
            }
            for body in &star.objects {
                bodies += 1;
                let slot = match body.kind {
                    BodyKind::RockyPlanet => 0,
                    BodyKind::GasGiant => 1,
                    BodyKind::IcyGiant => 2,
                    BodyKind::AsteroidBelt => 3,
                };
                counts[slot] += 1;

                let (min, max) = body.kind.size_range();
                if body.size() < min || body.size() > max {
                    bad_size += 1;
                }
                let settlements = body.grid.iter().filter(|sq| sq.is_settlement()).count();
                let ok = if body.populated {
                    settlements == 1 && body.grid[0].is_settlement()
                } else {
                    settlements == 0
                };
                if !ok {
                    bad_settlement += 1;
                }
            }
        }
    }

    if cli.verbose {
        println!(
            "  {} bodies: {} rocky, {} gas, {} icy, {} belts",
            bodies, counts[0], counts[1], counts[2], counts[3]
        );
    }

    results.push(TestResult {
        name: "surface_size_ranges".into(),
        passed: bad_size == 0,
        detail: format!("{} of {} bodies out of range", bad_size, bodies),
    });
    results.push(TestResult {
        name: "settlement_on_center".into(),
        passed: bad_settlement == 0,
        detail: format!("{} bodies with misplaced settlements", bad_settlement),
    });
    results.push(TestResult {
        name: "rocky_planet_cap".into(),
        passed: too_many_rocky == 0,
        detail: format!("{} systems over 11 rocky planets", too_many_rocky),
    });
    results.push(TestResult {
        name: "explore_idempotent".into(),
        passed: not_idempotent == 0,
        detail: format!("{} repeat explorations changed a system", not_idempotent),
    });

    results
}

// ── 3. Determinism ──────────────────────────────────────────────────────

fn validate_determinism(config: &GameConfig, names: &NamePool, seed: u64) -> Vec<TestResult> {
    println!("--- Determinism ---");
    let mut results = Vec::new();

    let explore_all = |seed: u64| -> Option<Galaxy> {
        let mut galaxy = generate(config, names, seed).ok()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for id in 0..galaxy.len() {
            galaxy.explore(id, &mut rng).ok()?;
        }
        Some(galaxy)
    };

    let a = explore_all(seed);
    let b = explore_all(seed);
    results.push(TestResult {
        name: "same_seed_same_world".into(),
        passed: a.is_some() && a == b,
        detail: format!("seed {} reproduces stars, pathways and surfaces", seed),
    });

    let c = explore_all(seed.wrapping_add(1));
    results.push(TestResult {
        name: "different_seed_different_world".into(),
        passed: a.is_some() && a != c,
        detail: format!("seeds {} and {} differ", seed, seed.wrapping_add(1)),
    });

    results
}

// ── 4. Camera ───────────────────────────────────────────────────────────

fn validate_camera(config: &GameConfig, names: &NamePool, seed: u64) -> Vec<TestResult> {
    println!("--- Camera ---");
    let mut results = Vec::new();

    let Ok(mut galaxy) = generate(config, names, seed) else {
        results.push(TestResult {
            name: "camera_galaxy".into(),
            passed: false,
            detail: "could not generate a galaxy".into(),
        });
        return results;
    };
    let size = galaxy.size() as f32;

    results.push(TestResult {
        name: "camera_initial_zoom".into(),
        passed: galaxy.camera.zoom_level() == 1 && galaxy.camera.current_zoom() == size,
        detail: format!("level 1 spans {}", galaxy.camera.current_zoom()),
    });

    let all_visible = galaxy.select_visible_star().visible_count() == galaxy.len();
    results.push(TestResult {
        name: "camera_full_view".into(),
        passed: all_visible,
        detail: "widest zoom shows every star".into(),
    });

    let mut clamped = true;
    for _ in 0..3 {
        galaxy.move_camera(CameraCommand::Zoom);
        for _ in 0..100 {
            galaxy.move_camera(CameraCommand::Right);
            galaxy.move_camera(CameraCommand::Up);
            let max = size - galaxy.camera.current_zoom();
            let pos = galaxy.camera.position();
            if pos.x > max || pos.y > max || pos.x < 0.0 || pos.y < 0.0 {
                clamped = false;
            }
        }
    }
    results.push(TestResult {
        name: "camera_pan_clamped".into(),
        passed: clamped,
        detail: "panning never leaves [0, size - zoom]".into(),
    });

    // Boundary star: exactly on the right edge of the window
    galaxy.move_camera(CameraCommand::Zoom);
    galaxy.camera.set_position(Vec2::ZERO);
    let edge = Vec2::new(galaxy.camera.current_zoom(), 0.0);
    results.push(TestResult {
        name: "camera_inclusive_boundary".into(),
        passed: galaxy.camera.is_visible(&edge),
        detail: "star at x == camera_x + zoom is visible".into(),
    });

    let vis = galaxy.select_visible_star();
    let edges_ok = galaxy
        .adjacency()
        .edges()
        .all(|(a, b)| vis.edges.is_linked(a, b) == (vis.stars[a] && vis.stars[b]));
    results.push(TestResult {
        name: "camera_visible_edges".into(),
        passed: edges_ok,
        detail: format!("{} stars visible", vis.visible_count()),
    });

    results
}

// ── 5. Engine & Save Files ──────────────────────────────────────────────

fn validate_engine(config: &GameConfig, names: &NamePool, seed: u64) -> Vec<TestResult> {
    println!("--- Engine & Save Files ---");
    let mut results = Vec::new();

    let mut config = config.clone();
    config.galaxy.seed = Some(seed);
    let mut engine = match GameEngine::new(config, names) {
        Ok(e) => e,
        Err(e) => {
            results.push(TestResult {
                name: "engine_start".into(),
                passed: false,
                detail: e.to_string(),
            });
            return results;
        }
    };

    results.push(TestResult {
        name: "engine_start".into(),
        passed: engine.current_star().is_some_and(|s| s.is_explored()),
        detail: "docked at an explored home star".into(),
    });

    let Some(target) = engine.destinations().first().map(|s| s.name.clone()) else {
        results.push(TestResult {
            name: "engine_travel".into(),
            passed: engine.galaxy().len() == 1,
            detail: "home star has no pathways".into(),
        });
        return results;
    };

    let travel_ok = engine.travel_to(&target).is_ok();
    let mut arrived = false;
    let mut save_buffer = Vec::new();
    let saved = engine.save(&mut save_buffer).is_ok();
    let loaded = GameEngine::load(&save_buffer[..]);

    for _ in 0..1_000_000 {
        match engine.update(0.5) {
            Ok(_) if engine.player().docked_at().is_some() => {
                arrived = true;
                break;
            }
            Ok(_) => {}
            Err(_) => break,
        }
    }
    results.push(TestResult {
        name: "engine_travel".into(),
        passed: travel_ok && arrived,
        detail: format!("flew to {}", target),
    });

    let resumed = match loaded {
        Ok(mut copy) => {
            let mut docked = false;
            for _ in 0..1_000_000 {
                if copy.update(0.5).is_err() {
                    break;
                }
                if copy.player().docked_at().is_some() {
                    docked = true;
                    break;
                }
            }
            docked && copy.galaxy() == engine.galaxy() && copy.player() == engine.player()
        }
        Err(_) => false,
    };
    results.push(TestResult {
        name: "save_load_roundtrip".into(),
        passed: saved && resumed,
        detail: format!("{} byte save resumes identically", save_buffer.len()),
    });

    results
}
