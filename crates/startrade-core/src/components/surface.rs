//! Surface grid cells of planets, giants and belts.

use serde::{Deserialize, Serialize};

/// Cell offsets in spiral order: center, the four neighbours, the diagonals,
/// then the second ring. A grid of size `n` uses the first `n` entries.
pub const SPIRAL_LAYOUT: [(i32, i32); 21] = [
    (0, 0),
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
    (1, -1),
    (2, 0),
    (0, 2),
    (-2, 0),
    (0, -2),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Largest surface a body can have.
pub const MAX_SURFACE_SIZE: usize = SPIRAL_LAYOUT.len();

/// Harvestable resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Resource {
    Ice,
    Coal,
    Iron,
    Oil,
    Uranium,
    Titanium,
    Methane,
    Helium,
    Hydrogen,
}

impl Resource {
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Ice => "ice",
            Resource::Coal => "coal",
            Resource::Iron => "iron",
            Resource::Oil => "oil",
            Resource::Uranium => "uranium",
            Resource::Titanium => "titanium",
            Resource::Methane => "methane",
            Resource::Helium => "helium",
            Resource::Hydrogen => "hydrogen",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Things built or found on a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Content {
    Settlement,
}

/// One cell of a surface grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    /// Offset from the grid center
    pub position: (i32, i32),
    pub resource: Option<Resource>,
    pub content: Option<Content>,
}

impl Square {
    pub fn new(position: (i32, i32)) -> Self {
        Self {
            position,
            resource: None,
            content: None,
        }
    }

    pub fn with_resource(mut self, resource: Option<Resource>) -> Self {
        self.resource = resource;
        self
    }

    pub fn with_content(mut self, content: Option<Content>) -> Self {
        self.content = content;
        self
    }

    pub fn is_settlement(&self) -> bool {
        self.content == Some(Content::Settlement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_spiral_starts_at_center() {
        assert_eq!(SPIRAL_LAYOUT[0], (0, 0));
        assert_eq!(MAX_SURFACE_SIZE, 21);
    }

    #[test]
    fn test_spiral_offsets_unique() {
        let unique: HashSet<_> = SPIRAL_LAYOUT.iter().collect();
        assert_eq!(unique.len(), SPIRAL_LAYOUT.len());
    }

    #[test]
    fn test_spiral_expands_outward() {
        // Each cell is no farther from the center than any cell after it
        let dist = |(x, y): (i32, i32)| x * x + y * y;
        for pair in SPIRAL_LAYOUT.windows(2) {
            assert!(dist(pair[0]) <= dist(pair[1]), "{:?} before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_square_builders() {
        let sq = Square::new((1, 0))
            .with_resource(Some(Resource::Iron))
            .with_content(Some(Content::Settlement));
        assert_eq!(sq.resource, Some(Resource::Iron));
        assert!(sq.is_settlement());
        assert!(!Square::new((0, 0)).is_settlement());
    }
}
