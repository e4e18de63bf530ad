//! World model data: stars, their bodies and surface cells, and the player.
//!
//! These are plain data structs. Generation lives in [`crate::generation`].

mod body;
mod common;
mod player;
mod star;
mod surface;

pub use body::*;
pub use common::*;
pub use player::*;
pub use star::*;
pub use surface::*;
