//! Generation - procedural creation of the galaxy, star systems and surfaces.

mod galaxy;
mod names;
mod surface;
mod system;

pub use galaxy::*;
pub use names::*;
pub use surface::*;
pub use system::*;
