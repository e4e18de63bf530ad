//! Systems - per-tick logic that runs on top of the world model.

mod events;

pub use events::*;
