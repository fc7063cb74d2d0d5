//! Draw-list rendering
//!
//! Turns the current game state into a flat triangle list. Stateless: the
//! same state always produces the same vertices, and nothing flows back
//! into the simulation.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::Scene;
pub use vertex::{Vertex, as_bytes, colors};
