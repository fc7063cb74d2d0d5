//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically, plus the
//! start -> playing -> over -> start state machine.

use super::circle_pair_collision;
use super::state::{GameEvent, GamePhase, GameState, HitCause};

/// Discrete inputs from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Start a run, or flap while playing
    Begin,
    /// Leave the game-over screen
    Restart,
}

/// Input commands for a single tick, applied in arrival order
/// (one-shot, cleared by the host after use)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub inputs: Vec<Input>,
}

impl TickInput {
    pub fn push(&mut self, input: Input) {
        self.inputs.push(input);
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl From<Input> for TickInput {
    fn from(input: Input) -> Self {
        Self {
            inputs: vec![input],
        }
    }
}

/// Route a single input through the state machine.
///
/// Inputs that are not valid for the current phase are ignored.
pub fn apply_input(state: &mut GameState, input: Input) {
    match (input, state.phase) {
        (Input::Begin, GamePhase::Start) => start(state),
        (Input::Begin, GamePhase::Playing) => {
            flap(state);
        }
        (Input::Restart, GamePhase::Over) => {
            restart(state);
        }
        _ => {}
    }
}

/// Advance the game state by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Each input sees the phase left by the one before it
    for &queued in &input.inputs {
        apply_input(state, queued);
    }

    state.frames += 1;

    update_avatar(state);
    update_field(state);
}

/// Apply the flap impulse. Only valid while playing.
pub fn flap(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }
    state.avatar.flap(state.tuning.flap_impulse);
    state.push_event(GameEvent::Flapped);
    true
}

/// over -> start: clear the run and restore the initial pose
pub fn restart(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Over {
        return false;
    }
    state.phase = GamePhase::Start;
    state.score = 0;
    state.frames = 0;
    state.avatar.reset(&state.tuning);
    state.field.reset();
    state.push_event(GameEvent::Restarted);
    log::debug!("Restarted (best {})", state.best_score);
    true
}

fn start(state: &mut GameState) {
    state.phase = GamePhase::Playing;
    state.push_event(GameEvent::Started);
    log::debug!("Run started at frame {}", state.frames);
}

/// playing -> over. Fires at most once per run.
fn game_over(state: &mut GameState, cause: HitCause) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.phase = GamePhase::Over;
    state.push_event(GameEvent::Hit { cause });

    let new_best = state.score > state.best_score;
    if new_best {
        state.best_score = state.score;
    }
    state.push_event(GameEvent::GameOver {
        final_score: state.score,
        best_score: state.best_score,
        new_best,
    });
    log::info!(
        "Game over ({:?}): score {}, best {}{}",
        cause,
        state.score,
        state.best_score,
        if new_best { " (new best)" } else { "" }
    );
}

fn update_avatar(state: &mut GameState) {
    // Cosmetic, runs in every phase
    state.avatar.animate(state.frames);

    let playing = state.phase == GamePhase::Playing;
    if playing {
        state.avatar.integrate(&state.tuning);
    }

    let floor_y = state.tuning.floor_y();
    if state.avatar.clamp_bounds(floor_y) && playing {
        game_over(state, HitCause::Ground);
    }
}

fn update_field(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let interval = state.tuning.spawn_interval_ticks();
    {
        let (field, rng, tuning) = state.field_and_rng();
        field.play_ticks += 1;
        if field.play_ticks % interval == 0 && !field.spawn(tuning, rng) {
            log::debug!("Spawn skipped: no room for a gap");
        }
    }

    let width = state.tuning.obstacle_width;
    let speed = state.tuning.obstacle_speed;
    let center = state.avatar.pos;
    let radius = state.avatar.radius;

    let mut cleared = 0;
    let mut hit = None;
    for pair in state.field.pairs.iter_mut() {
        pair.x -= speed;

        // Remaining pairs still move after a hit, but nothing else counts
        if hit.is_some() {
            continue;
        }

        if !pair.scored && pair.trailing_edge(width) < center.x {
            pair.scored = true;
            cleared += 1;
        }

        // A pair that is leaving the screen this tick is still tested
        hit = circle_pair_collision(center, radius, pair, width);
    }

    state.field.evict_offscreen(width);

    for _ in 0..cleared {
        state.score += 1;
        let score = state.score;
        state.push_event(GameEvent::Scored { score });
    }

    if let Some(cause) = hit {
        game_over(state, cause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Avatar, ObstaclePair};
    use crate::tuning::Tuning;

    fn hovering() -> GameState {
        let tuning = Tuning {
            gravity: 0.0,
            ..Default::default()
        };
        GameState::new(tuning, 12345, 0)
    }

    fn begin() -> TickInput {
        TickInput::from(Input::Begin)
    }

    fn run_until_over(state: &mut GameState, max_ticks: u32) {
        for _ in 0..max_ticks {
            tick(state, &TickInput::default());
            if state.phase == GamePhase::Over {
                return;
            }
        }
        panic!("run never ended");
    }

    #[test]
    fn test_tick_start_to_playing() {
        let mut state = GameState::new(Tuning::default(), 12345, 0);
        assert_eq!(state.phase, GamePhase::Start);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Start);

        tick(&mut state, &begin());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.drain_events(), vec![GameEvent::Started]);
    }

    #[test]
    fn test_idle_phases_freeze_the_world() {
        let mut state = GameState::new(Tuning::default(), 1, 0);
        let y = state.avatar.pos.y;
        for _ in 0..300 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.avatar.pos.y, y);
        assert_eq!(state.avatar.vel, 0.0);
        assert!(state.field.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.frames, 300);
    }

    #[test]
    fn test_first_tick_of_gravity() {
        let mut state = GameState::new(Tuning::default(), 1, 0);
        apply_input(&mut state, Input::Begin);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.avatar.vel, 0.25);
        assert_eq!(state.avatar.pos.y, 300.25);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut state = GameState::new(Tuning::default(), 1, 0);
        assert!(!flap(&mut state));

        apply_input(&mut state, Input::Begin);
        for _ in 0..20 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.avatar.vel > 0.0);

        apply_input(&mut state, Input::Begin);
        assert_eq!(state.avatar.vel, state.tuning.flap_impulse);
        assert_eq!(state.pending_events().last(), Some(&GameEvent::Flapped));
    }

    #[test]
    fn test_first_spawn_after_interval() {
        let mut state = hovering();
        tick(&mut state, &begin());
        for _ in 1..107 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.field.is_empty());

        tick(&mut state, &TickInput::default());
        assert_eq!(state.field.len(), 1);
    }

    #[test]
    fn test_obstacle_advance_and_evict() {
        let mut state = hovering();
        apply_input(&mut state, Input::Begin);
        for _ in 0..108 {
            tick(&mut state, &TickInput::default());
        }
        let width = state.tuning.canvas_width;
        // Spawn tick counts as the first step
        assert_eq!(state.field.pairs[0].x, width - 3.0);

        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.field.pairs[0].x, width - 33.0);
    }

    #[test]
    fn test_offscreen_pair_is_removed() {
        let mut state = hovering();
        apply_input(&mut state, Input::Begin);
        let mut pair = ObstaclePair::new(-77.0, 225.0, 150.0);
        pair.scored = true;
        state.field.pairs.push_back(pair);

        tick(&mut state, &TickInput::default());
        assert!(state.field.is_empty());
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_pair_leaving_screen_still_collides() {
        let tuning = Tuning {
            avatar_x: 5.0,
            gravity: 0.0,
            ..Default::default()
        };
        let mut state = GameState::new(tuning, 12345, 0);
        apply_input(&mut state, Input::Begin);
        state.drain_events();
        // Moves to x=-80: trailing edge at 0, so it is evicted this tick.
        // The avatar spans -15..25 and sits above the gap at 400..550.
        let mut pair = ObstaclePair::new(-77.0, 400.0, 150.0);
        pair.scored = true;
        state.field.pairs.push_back(pair);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Over);
        assert!(state.field.is_empty());
        assert_eq!(
            state.drain_events()[0],
            GameEvent::Hit {
                cause: HitCause::TopObstacle
            }
        );
    }

    #[test]
    fn test_score_once_per_pair() {
        let mut state = hovering();
        apply_input(&mut state, Input::Begin);
        state.drain_events();
        // Gap 225..375 around the avatar at y=300; trailing edge at 121
        state.field.pairs.push_back(ObstaclePair::new(41.0, 225.0, 150.0));

        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 1);
        assert!(state.field.pairs[0].scored);
        assert_eq!(state.drain_events(), vec![GameEvent::Scored { score: 1 }]);

        for _ in 0..5 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.score, 1);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_obstacle_collision_ends_run() {
        let mut state = hovering();
        apply_input(&mut state, Input::Begin);
        state.drain_events();
        // Gap far below the avatar
        state.field.pairs.push_back(ObstaclePair::new(110.0, 400.0, 150.0));

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::Hit {
                    cause: HitCause::TopObstacle
                },
                GameEvent::GameOver {
                    final_score: 0,
                    best_score: 0,
                    new_best: false
                },
            ]
        );
    }

    #[test]
    fn test_ground_collision_fires_once() {
        let mut state = GameState::new(Tuning::default(), 3, 0);
        apply_input(&mut state, Input::Begin);
        run_until_over(&mut state, 200);

        let floor = state.tuning.floor_y();
        assert_eq!(state.avatar.pos.y, floor - state.avatar.height);

        for _ in 0..100 {
            tick(&mut state, &begin());
        }
        let game_overs = state
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn test_high_score_is_max() {
        let mut state = GameState::new(Tuning::default(), 3, 5);
        apply_input(&mut state, Input::Begin);
        state.score = 3;
        run_until_over(&mut state, 200);
        assert_eq!(state.best_score, 5);

        apply_input(&mut state, Input::Restart);
        apply_input(&mut state, Input::Begin);
        state.score = 7;
        state.drain_events();
        run_until_over(&mut state, 200);
        assert_eq!(state.best_score, 7);
        assert!(state.drain_events().contains(&GameEvent::GameOver {
            final_score: 7,
            best_score: 7,
            new_best: true
        }));
    }

    #[test]
    fn test_restart_resets_run() {
        let mut state = GameState::new(Tuning::default(), 9, 0);
        apply_input(&mut state, Input::Begin);
        state.score = 4;
        state.field.pairs.push_back(ObstaclePair::new(400.0, 100.0, 150.0));
        run_until_over(&mut state, 200);

        // Begin is not a restart
        apply_input(&mut state, Input::Begin);
        assert_eq!(state.phase, GamePhase::Over);

        apply_input(&mut state, Input::Restart);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.score, 0);
        assert_eq!(state.frames, 0);
        assert!(state.field.is_empty());
        assert_eq!(state.field.play_ticks, 0);
        assert_eq!(state.avatar, Avatar::new(&state.tuning));
        assert_eq!(state.pending_events().last(), Some(&GameEvent::Restarted));
    }

    #[test]
    fn test_restart_ignored_outside_over() {
        let mut state = GameState::new(Tuning::default(), 9, 0);
        apply_input(&mut state, Input::Restart);
        assert_eq!(state.phase, GamePhase::Start);

        apply_input(&mut state, Input::Begin);
        apply_input(&mut state, Input::Restart);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_inputs_apply_in_order() {
        let mut state = GameState::new(Tuning::default(), 9, 0);
        let mut input = TickInput::default();
        input.push(Input::Begin);
        input.push(Input::Begin);

        // The second begin lands in `playing` and flaps
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.avatar.vel, -6.0 + 0.25);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Started, GameEvent::Flapped]
        );

        run_until_over(&mut state, 1000);
        let mut input = TickInput::from(Input::Restart);
        input.push(Input::Begin);
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.frames, 1);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = hovering();
        let mut state2 = hovering();

        tick(&mut state1, &begin());
        tick(&mut state2, &begin());
        for _ in 0..400 {
            tick(&mut state1, &TickInput::default());
            tick(&mut state2, &TickInput::default());
        }

        assert_eq!(state1.frames, state2.frames);
        assert_eq!(state1.field, state2.field);
        assert_eq!(state1.score, state2.score);
    }
}
