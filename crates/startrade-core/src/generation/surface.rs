//! Surface grid generation for system objects.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::{
    BodyKind, Content, Resource, Square, SystemObject, MAX_SURFACE_SIZE, SPIRAL_LAYOUT,
};
use crate::error::GenerationError;

/// Build a grid of `size` cells laid out along the spiral.
///
/// Each cell draws its resource uniformly from `resources`. A populated grid
/// gets its settlement on cell 0, the center.
pub fn generate_surface(
    size: usize,
    resources: &[Option<Resource>],
    populated: bool,
    rng: &mut impl Rng,
) -> Result<Vec<Square>, GenerationError> {
    if size > MAX_SURFACE_SIZE {
        return Err(GenerationError::InvalidSurfaceSize {
            requested: size,
            max: MAX_SURFACE_SIZE,
        });
    }

    let grid = SPIRAL_LAYOUT[..size]
        .iter()
        .enumerate()
        .map(|(i, &offset)| {
            let resource = resources.choose(rng).copied().flatten();
            let content = (populated && i == 0).then_some(Content::Settlement);
            Square::new(offset)
                .with_resource(resource)
                .with_content(content)
        })
        .collect();

    Ok(grid)
}

/// Roll size, population and surface for a new body.
pub fn generate_body(
    kind: BodyKind,
    name: impl Into<String>,
    rng: &mut impl Rng,
) -> Result<SystemObject, GenerationError> {
    let (min, max) = kind.size_range();
    let size = rng.gen_range(min..=max);
    let populated = rng.gen_bool(kind.population_chance());
    let grid = generate_surface(size, kind.resource_table(), populated, rng)?;
    Ok(SystemObject::new(kind, name, grid, populated))
}
