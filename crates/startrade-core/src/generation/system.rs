//! Star system generation - the bodies found when a star is first explored.

use rand::Rng;

use super::generate_body;
use crate::components::{BodyKind, SystemObject};
use crate::error::GenerationError;

/// Chance to keep adding rocky planets.
const ROCKY_CHANCE: f64 = 0.8;
/// Rocky planets stop being added once the system holds this many bodies.
const ROCKY_LIMIT: usize = 10;
/// Threshold on the belt roll for the first asteroid belt.
const BELT_CHANCE: f64 = 0.8;
/// Threshold on the same roll for a second belt.
const SECOND_BELT_CHANCE: f64 = 0.1;
/// Chance for each of the two gas giant slots, and each of the two icy slots.
const GIANT_CHANCE: f64 = 0.5;

/// Generate the bodies of a star system, innermost first.
///
/// Rocky planets come first, then an optional asteroid belt, up to two gas
/// giants and up to two icy giants. A single belt roll decides both the first
/// belt and a rare second belt placed outside the giants.
pub fn populate_system(
    star_name: &str,
    rng: &mut impl Rng,
) -> Result<Vec<SystemObject>, GenerationError> {
    let mut objects: Vec<SystemObject> = Vec::new();

    while objects.len() <= ROCKY_LIMIT && rng.gen_bool(ROCKY_CHANCE) {
        push_body(&mut objects, star_name, BodyKind::RockyPlanet, rng)?;
    }

    let belt_roll: f64 = rng.gen();
    if belt_roll <= BELT_CHANCE {
        push_body(&mut objects, star_name, BodyKind::AsteroidBelt, rng)?;
    }

    for _ in 0..2 {
        if rng.gen_bool(GIANT_CHANCE) {
            push_body(&mut objects, star_name, BodyKind::GasGiant, rng)?;
        }
    }
    for _ in 0..2 {
        if rng.gen_bool(GIANT_CHANCE) {
            push_body(&mut objects, star_name, BodyKind::IcyGiant, rng)?;
        }
    }

    if belt_roll <= SECOND_BELT_CHANCE {
        push_body(&mut objects, star_name, BodyKind::AsteroidBelt, rng)?;
    }

    Ok(objects)
}

fn push_body(
    objects: &mut Vec<SystemObject>,
    star_name: &str,
    kind: BodyKind,
    rng: &mut impl Rng,
) -> Result<(), GenerationError> {
    let name = body_name(objects, star_name, kind);
    objects.push(generate_body(kind, name, rng)?);
    Ok(())
}

/// Name for the next body given the ones already in the system.
///
/// Planets and giants take a letter after the star name, starting at `b`
/// and skipping over belts. Belts are "<star>'s asteroid belt", with " II"
/// added for every belt before it.
pub fn body_name(objects: &[SystemObject], star_name: &str, kind: BodyKind) -> String {
    let belts = objects
        .iter()
        .filter(|o| o.kind == BodyKind::AsteroidBelt)
        .count();

    if kind == BodyKind::AsteroidBelt {
        let mut name = format!("{}'s asteroid belt", star_name);
        for _ in 0..belts {
            name.push_str(" II");
        }
        return name;
    }

    let index = objects.len() - belts + 1;
    let letter = char::from(b'a' + index as u8);
    format!("{} {}", star_name, letter)
}
