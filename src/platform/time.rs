//! Fixed-step accumulator
//!
//! Physics constants are per tick, so hosts must feed the simulation at a
//! steady rate whatever their display refresh is.

/// Largest frame delta accepted, in seconds. Longer stalls are dropped.
const MAX_FRAME_DT: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f64,
    accumulator: f64,
    max_substeps: u32,
}

impl FixedStep {
    pub fn new(tick_hz: u32, max_substeps: u32) -> Self {
        Self {
            step: 1.0 / tick_hz.max(1) as f64,
            accumulator: 0.0,
            max_substeps: max_substeps.max(1),
        }
    }

    /// Seconds per tick
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Feed a frame delta (seconds); returns how many ticks to run now
    pub fn advance(&mut self, dt: f64) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }
        // Spiral of death: forget whatever we could not catch up on
        if ticks == self.max_substeps && self.accumulator >= self.step {
            self.accumulator = 0.0;
        }
        ticks
    }

    /// Fraction of a tick left over, for render interpolation
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.step
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
