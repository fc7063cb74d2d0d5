//! Data-driven game balance
//!
//! Every physics and layout constant lives here so a host can load a JSON
//! override. All per-tick values assume the fixed `tick_hz` cadence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::StoreError;

/// Tunable game constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub tick_hz: u32,

    pub canvas_width: f32,
    pub canvas_height: f32,
    pub ground_height: f32,

    pub avatar_x: f32,
    pub avatar_start_y: f32,
    pub avatar_width: f32,
    pub avatar_height: f32,
    pub avatar_radius: f32,

    /// Velocity added every tick while playing
    pub gravity: f32,
    /// Velocity set on flap (negative = up)
    pub flap_impulse: f32,

    pub tilt_up: f32,
    pub tilt_down_max: f32,
    pub tilt_step: f32,

    pub obstacle_speed: f32,
    pub obstacle_width: f32,
    pub spawn_interval_ms: u32,
    pub gap_size: f32,
    pub gap_margin_top: f32,
    pub gap_margin_bottom: f32,

    pub die_tone_delay_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_hz: TICK_HZ,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            ground_height: GROUND_HEIGHT,
            avatar_x: AVATAR_X,
            avatar_start_y: AVATAR_START_Y,
            avatar_width: AVATAR_WIDTH,
            avatar_height: AVATAR_HEIGHT,
            avatar_radius: AVATAR_RADIUS,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            tilt_up: TILT_UP_DEG.to_radians(),
            tilt_down_max: TILT_DOWN_MAX_DEG.to_radians(),
            tilt_step: TILT_STEP,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            gap_size: GAP_SIZE,
            gap_margin_top: GAP_MARGIN_TOP,
            gap_margin_bottom: GAP_MARGIN_BOTTOM,
            die_tone_delay_ms: DIE_TONE_DELAY_MS,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Spawn cadence in ticks. Integer math so 1800 ms @ 60 Hz is exactly 108.
    pub fn spawn_interval_ticks(&self) -> u64 {
        let ticks = self.spawn_interval_ms as u64 * self.tick_hz as u64 / 1000;
        ticks.max(1)
    }

    /// Top of the ground strip
    pub fn floor_y(&self) -> f32 {
        self.canvas_height - self.ground_height
    }

    /// Valid half-open range for a gap's top height, or `None` when the
    /// canvas is too short to fit a gap above the ground.
    pub fn gap_top_range(&self) -> Option<(i32, i32)> {
        let lo = self.gap_margin_top.floor() as i32;
        let hi =
            (self.canvas_height - self.gap_size - self.ground_height - self.gap_margin_bottom)
                .floor() as i32;
        if hi > lo { Some((lo, hi)) } else { None }
    }

    /// Sanity check a loaded configuration; returns human readable warnings
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.tick_hz == 0 {
            warnings.push("tick_hz is 0; treating as 1".to_string());
        }
        if self.gap_top_range().is_none() {
            warnings.push(format!(
                "canvas height {} cannot fit gap {} above ground {}; obstacles will not spawn",
                self.canvas_height, self.gap_size, self.ground_height
            ));
        }
        if self.gravity <= 0.0 {
            warnings.push(format!("gravity {} is not positive", self.gravity));
        }
        if self.obstacle_speed <= 0.0 {
            warnings.push(format!(
                "obstacle speed {} is not positive; obstacles will never leave",
                self.obstacle_speed
            ));
        }
        if self.avatar_start_y + self.avatar_height > self.floor_y() {
            warnings.push("avatar starts below the ground line".to_string());
        }
        warnings
    }
}
