//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (no delta-time scaling)
//! - Seeded RNG only
//! - Obstacles processed oldest-first
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{circle_pair_collision, overlaps_horizontally};
pub use state::{
    Avatar, GameEvent, GamePhase, GameState, HitCause, ObstacleField, ObstaclePair,
};
pub use tick::{Input, TickInput, apply_input, flap, restart, tick};
