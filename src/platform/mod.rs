//! Platform abstraction layer
//!
//! Host-side glue between a real event loop and the fixed-tick simulation:
//! - Time: wall-clock deltas to whole ticks
//! - Timers: deferred one-shot events (the delayed die tone)
//! - Input: physical controls to simulation inputs

pub mod input;
pub mod time;
pub mod timers;

pub use input::Control;
pub use time::FixedStep;
pub use timers::Timers;
