//! Game state and core simulation types
//!
//! Everything the tick function reads or writes lives in [`GameState`];
//! there is no ambient global state.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{ANIMATION_SEQUENCE, ANIMATION_TICKS};
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first begin input
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    Over,
}

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitCause {
    Ground,
    TopObstacle,
    BottomObstacle,
}

/// Things that happened during a tick, drained by the host to drive
/// audio, display and persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// start -> playing
    Started,
    /// Flap impulse applied
    Flapped,
    /// An obstacle was cleared; carries the new score
    Scored { score: u32 },
    /// Fatal collision (always immediately followed by `GameOver`)
    Hit { cause: HitCause },
    /// playing -> over
    GameOver {
        final_score: u32,
        best_score: u32,
        new_best: bool,
    },
    /// over -> start
    Restarted,
}

/// The player's avatar
///
/// `pos` is the centre of the collision circle. The ground test uses
/// `pos.y + height` against the floor line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    pub pos: Vec2,
    /// Vertical velocity (pixels/tick, positive = down)
    pub vel: f32,
    /// Radians, positive = nose down
    pub rotation: f32,
    pub radius: f32,
    pub width: f32,
    pub height: f32,
    /// Index into the wing animation sequence
    pub frame: usize,
}

impl Avatar {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.avatar_x, tuning.avatar_start_y),
            vel: 0.0,
            rotation: 0.0,
            radius: tuning.avatar_radius,
            width: tuning.avatar_width,
            height: tuning.avatar_height,
            frame: 0,
        }
    }

    /// Set velocity to the flap impulse, whatever it was before
    pub fn flap(&mut self, impulse: f32) {
        self.vel = impulse;
    }

    /// One tick of gravity and the derived rotation
    pub fn integrate(&mut self, tuning: &Tuning) {
        self.vel += tuning.gravity;
        self.pos.y += self.vel;

        if self.vel <= 0.0 {
            self.rotation = tuning.tilt_up;
        } else if self.rotation < tuning.tilt_down_max {
            self.rotation = (self.rotation + tuning.tilt_step).min(tuning.tilt_down_max);
        }
    }

    /// Clamp to the floor and ceiling. Returns true if the avatar is resting
    /// on (or was pushed back to) the floor.
    pub fn clamp_bounds(&mut self, floor_y: f32) -> bool {
        let mut grounded = false;
        if self.pos.y + self.height >= floor_y {
            self.pos.y = floor_y - self.height;
            grounded = true;
        }
        if self.pos.y <= 0.0 {
            self.pos.y = 0.0;
            self.vel = 0.0;
        }
        grounded
    }

    /// Cosmetic wing cycle, advanced on every `ANIMATION_TICKS`-th frame
    pub fn animate(&mut self, frames: u64) {
        if frames % ANIMATION_TICKS == 0 {
            self.frame = (self.frame + 1) % ANIMATION_SEQUENCE.len();
        }
    }

    /// Sprite pose for the current animation step
    pub fn sprite_frame(&self) -> u8 {
        ANIMATION_SEQUENCE[self.frame]
    }

    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }
}

/// A top/bottom obstacle pair with a fixed-size gap between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    /// Left edge
    pub x: f32,
    /// Bottom of the top rectangle
    pub top_height: f32,
    /// Top of the bottom rectangle; always `top_height + gap`
    pub bottom_y: f32,
    pub scored: bool,
}

impl ObstaclePair {
    pub fn new(x: f32, top_height: f32, gap: f32) -> Self {
        Self {
            x,
            top_height,
            bottom_y: top_height + gap,
            scored: false,
        }
    }

    pub fn trailing_edge(&self, width: f32) -> f32 {
        self.x + width
    }

    pub fn gap(&self) -> f32 {
        self.bottom_y - self.top_height
    }

    pub fn gap_center(&self) -> f32 {
        (self.top_height + self.bottom_y) / 2.0
    }
}

/// Obstacles in spawn order (oldest, and therefore leftmost, first)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    pub pairs: VecDeque<ObstaclePair>,
    /// Ticks spent playing in this run; drives the spawn cadence
    pub play_ticks: u64,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair at the right boundary. Returns false (and spawns
    /// nothing) when the configured canvas cannot fit a gap.
    pub fn spawn(&mut self, tuning: &Tuning, rng: &mut Pcg32) -> bool {
        let Some((lo, hi)) = tuning.gap_top_range() else {
            return false;
        };
        let top_height = rng.random_range(lo..hi) as f32;
        self.pairs
            .push_back(ObstaclePair::new(tuning.canvas_width, top_height, tuning.gap_size));
        true
    }

    /// Drop pairs whose trailing edge has crossed the left boundary
    pub fn evict_offscreen(&mut self, width: f32) -> usize {
        let mut evicted = 0;
        while self
            .pairs
            .front()
            .is_some_and(|p| p.trailing_edge(width) <= 0.0)
        {
            self.pairs.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// First pair whose trailing edge is still right of `x`
    pub fn next_ahead_of(&self, x: f32, width: f32) -> Option<&ObstaclePair> {
        self.pairs.iter().find(|p| p.trailing_edge(width) >= x)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObstaclePair> {
        self.pairs.iter()
    }

    pub fn reset(&mut self) {
        self.pairs.clear();
        self.play_ticks = 0;
    }
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    /// Best score seen so far, loaded from persistence at startup
    pub best_score: u32,
    /// Frame counter; counts every tick regardless of phase
    pub frames: u64,
    pub avatar: Avatar,
    pub field: ObstacleField,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(tuning: Tuning, seed: u64, best_score: u32) -> Self {
        let avatar = Avatar::new(&tuning);
        Self {
            tuning,
            seed,
            phase: GamePhase::Start,
            score: 0,
            best_score,
            frames: 0,
            avatar,
            field: ObstacleField::new(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Split borrow used by the spawn step
    pub(crate) fn field_and_rng(&mut self) -> (&mut ObstacleField, &mut Pcg32, &Tuning) {
        (&mut self.field, &mut self.rng, &self.tuning)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events produced since the last drain
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_gravity_step() {
        let tuning = Tuning::default();
        let mut avatar = Avatar::new(&tuning);
        assert_eq!(avatar.pos.y, 300.0);

        avatar.integrate(&tuning);
        assert_eq!(avatar.vel, 0.25);
        assert_eq!(avatar.pos.y, 300.25);
    }

    #[test]
    fn test_avatar_rotation() {
        let tuning = Tuning::default();
        let mut avatar = Avatar::new(&tuning);

        avatar.flap(tuning.flap_impulse);
        avatar.integrate(&tuning);
        assert_eq!(avatar.rotation, tuning.tilt_up);

        // Fall long enough to saturate the downward tilt
        for _ in 0..200 {
            avatar.vel = 1.0;
            avatar.integrate(&tuning);
        }
        assert_eq!(avatar.rotation, tuning.tilt_down_max);
    }

    #[test]
    fn test_avatar_clamp_floor_and_ceiling() {
        let tuning = Tuning::default();
        let floor = tuning.floor_y();
        let mut avatar = Avatar::new(&tuning);

        avatar.pos.y = floor;
        assert!(avatar.clamp_bounds(floor));
        assert_eq!(avatar.pos.y, floor - avatar.height);

        avatar.pos.y = -10.0;
        avatar.vel = -6.0;
        assert!(!avatar.clamp_bounds(floor));
        assert_eq!(avatar.pos.y, 0.0);
        assert_eq!(avatar.vel, 0.0);
    }

    #[test]
    fn test_animation_cycle() {
        let tuning = Tuning::default();
        let mut avatar = Avatar::new(&tuning);
        let mut poses = Vec::new();
        for frames in 1..=20 {
            avatar.animate(frames);
            poses.push(avatar.sprite_frame());
        }
        // Advances on frames 5, 10, 15, 20
        assert_eq!(poses[3], 0);
        assert_eq!(poses[4], 1);
        assert_eq!(poses[9], 2);
        assert_eq!(poses[14], 1);
        assert_eq!(poses[19], 0);
    }

    #[test]
    fn test_spawn_within_range() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut field = ObstacleField::new();
        for _ in 0..100 {
            assert!(field.spawn(&tuning, &mut rng));
        }
        for pair in field.iter() {
            assert!(pair.top_height >= 20.0 && pair.top_height < 318.0);
            assert_eq!(pair.gap(), tuning.gap_size);
            assert_eq!(pair.x, tuning.canvas_width);
            assert!(!pair.scored);
        }
    }

    #[test]
    fn test_spawn_degenerate_range() {
        let tuning = Tuning {
            canvas_height: 250.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(7);
        let mut field = ObstacleField::new();
        assert!(!field.spawn(&tuning, &mut rng));
        assert!(field.is_empty());
    }

    #[test]
    fn test_evict_front_only() {
        let mut field = ObstacleField::new();
        field.pairs.push_back(ObstaclePair::new(-80.0, 100.0, 150.0));
        field.pairs.push_back(ObstaclePair::new(-79.0, 100.0, 150.0));
        field.pairs.push_back(ObstaclePair::new(200.0, 100.0, 150.0));

        assert_eq!(field.evict_offscreen(80.0), 1);
        assert_eq!(field.len(), 2);
        assert_eq!(field.pairs[0].x, -79.0);
    }
}
