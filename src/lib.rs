//! Flappy Arcade - a single-screen gap-flying arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (avatar physics, obstacles, game state)
//! - `renderer`: Stateless draw-list generation
//! - `platform`: Fixed-step clock, deferred timers, input bindings
//! - `persistence`: Key/value storage for the best score and settings
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::Game;
pub use highscores::HighScore;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation rate the physics constants are tuned for
    pub const TICK_HZ: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 480.0;
    pub const CANVAS_HEIGHT: f32 = 640.0;
    pub const GROUND_HEIGHT: f32 = 112.0;

    /// Avatar defaults (x, y is the collision centre)
    pub const AVATAR_X: f32 = 120.0;
    pub const AVATAR_START_Y: f32 = 300.0;
    pub const AVATAR_WIDTH: f32 = 50.0;
    pub const AVATAR_HEIGHT: f32 = 35.0;
    pub const AVATAR_RADIUS: f32 = 20.0;

    /// Per-tick physics
    pub const GRAVITY: f32 = 0.25;
    pub const FLAP_IMPULSE: f32 = -6.0;

    /// Rotation: snap up while rising, ease down while falling
    pub const TILT_UP_DEG: f32 = -25.0;
    pub const TILT_DOWN_MAX_DEG: f32 = 90.0;
    pub const TILT_STEP: f32 = 0.03;

    /// Wing animation: advance every N ticks through this sequence
    pub const ANIMATION_TICKS: u64 = 5;
    pub const ANIMATION_SEQUENCE: [u8; 4] = [0, 1, 2, 1];

    /// Obstacles
    pub const OBSTACLE_SPEED: f32 = 3.0;
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    pub const SPAWN_INTERVAL_MS: u32 = 1800;
    pub const GAP_SIZE: f32 = 150.0;
    /// Gap top stays at least this far below the ceiling
    pub const GAP_MARGIN_TOP: f32 = 20.0;
    /// ...and the gap bottom this far above the ground
    pub const GAP_MARGIN_BOTTOM: f32 = 60.0;

    /// Delay between the hit tone and the die tone
    pub const DIE_TONE_DELAY_MS: u32 = 500;
}
