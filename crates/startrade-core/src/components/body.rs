//! Planets, giants and asteroid belts orbiting a star.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Resource, Square};

/// Kind of system object. Drives surface size, resources and population odds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    RockyPlanet,
    GasGiant,
    IcyGiant,
    AsteroidBelt,
}

impl BodyKind {
    /// Inclusive range of surface cells.
    pub fn size_range(&self) -> (usize, usize) {
        match self {
            BodyKind::RockyPlanet => (2, 5),
            BodyKind::GasGiant => (10, 16),
            BodyKind::IcyGiant => (8, 12),
            BodyKind::AsteroidBelt => (1, 3),
        }
    }

    /// Per-cell resource table; every entry is equally likely.
    pub fn resource_table(&self) -> &'static [Option<Resource>] {
        use Resource::*;
        match self {
            BodyKind::RockyPlanet => &[
                Some(Ice),
                Some(Coal),
                Some(Iron),
                Some(Oil),
                Some(Uranium),
                Some(Titanium),
                None,
            ],
            BodyKind::GasGiant => &[Some(Methane), Some(Helium), Some(Hydrogen), None],
            BodyKind::IcyGiant => &[Some(Hydrogen), Some(Methane), Some(Helium), None],
            BodyKind::AsteroidBelt => &[Some(Ice), Some(Titanium), Some(Iron), None],
        }
    }

    /// Chance that the body hosts a settlement.
    pub fn population_chance(&self) -> f64 {
        match self {
            BodyKind::RockyPlanet => 1.0 / 4.0,
            BodyKind::GasGiant => 1.0 / 7.0,
            BodyKind::IcyGiant => 1.0 / 6.0,
            BodyKind::AsteroidBelt => 1.0 / 10.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BodyKind::RockyPlanet => "rocky planet",
            BodyKind::GasGiant => "gas giant",
            BodyKind::IcyGiant => "icy giant",
            BodyKind::AsteroidBelt => "asteroid belt",
        }
    }
}

/// A body in a star system, with its surface grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemObject {
    pub kind: BodyKind,
    pub name: String,
    pub grid: Vec<Square>,
    pub populated: bool,
    /// Visual variant, chosen the first time the body is drawn
    image_id: Option<u32>,
}

impl SystemObject {
    pub fn new(kind: BodyKind, name: impl Into<String>, grid: Vec<Square>, populated: bool) -> Self {
        Self {
            kind,
            name: name.into(),
            grid,
            populated,
            image_id: None,
        }
    }

    pub fn size(&self) -> usize {
        self.grid.len()
    }

    /// The visual variant in `0..variants`, picked on first call and cached.
    pub fn image_id(&mut self, rng: &mut impl Rng, variants: u32) -> u32 {
        *self
            .image_id
            .get_or_insert_with(|| rng.gen_range(0..variants.max(1)))
    }

    /// The cached visual variant, if one has been chosen.
    pub fn cached_image_id(&self) -> Option<u32> {
        self.image_id
    }

    pub fn settlement(&self) -> Option<&Square> {
        self.grid.iter().find(|sq| sq.is_settlement())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_size_ranges_fit_spiral() {
        for kind in [
            BodyKind::RockyPlanet,
            BodyKind::GasGiant,
            BodyKind::IcyGiant,
            BodyKind::AsteroidBelt,
        ] {
            let (min, max) = kind.size_range();
            assert!(min >= 1 && min <= max);
            assert!(max <= crate::components::MAX_SURFACE_SIZE);
        }
    }

    #[test]
    fn test_resource_tables_include_none() {
        assert_eq!(BodyKind::RockyPlanet.resource_table().len(), 7);
        assert_eq!(BodyKind::GasGiant.resource_table().len(), 4);
        assert!(BodyKind::IcyGiant.resource_table().contains(&None));
        assert!(BodyKind::AsteroidBelt.resource_table().contains(&Some(Resource::Titanium)));
    }

    #[test]
    fn test_image_id_is_cached() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut body = SystemObject::new(BodyKind::GasGiant, "Vega b", vec![], false);
        assert_eq!(body.cached_image_id(), None);

        let first = body.image_id(&mut rng, 5);
        assert!(first < 5);
        for _ in 0..20 {
            assert_eq!(body.image_id(&mut rng, 5), first);
        }
        assert_eq!(body.cached_image_id(), Some(first));
    }
}
