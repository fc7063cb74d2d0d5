//! Game host: owns the session and routes simulation events to the
//! peripheral collaborators (audio, display, persistence, timers).

use crate::audio::{AudioManager, Tone};
use crate::consts::MAX_SUBSTEPS;
use crate::highscores::HighScore;
use crate::persistence::Store;
use crate::platform::{Control, FixedStep, Timers};
use crate::renderer::Scene;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, Input, TickInput, apply_input, tick};
use crate::tuning::Tuning;
use crate::ui::Display;

/// Distance below the gap centre the autopilot aims for; a flap lifts the
/// avatar well past the centre.
const AUTOPILOT_AIM_OFFSET: f32 = 20.0;

/// Game instance holding all state
pub struct Game<D: Display> {
    state: GameState,
    high_score: HighScore,
    store: Box<dyn Store>,
    audio: AudioManager,
    display: D,
    timers: Timers<Tone>,
    clock: FixedStep,
    /// Controls received since the last tick, oldest first
    controls: Vec<Control>,
    /// Demo mode: the game plays itself
    pub autopilot: bool,
}

impl<D: Display> Game<D> {
    pub fn new(
        tuning: Tuning,
        seed: u64,
        store: Box<dyn Store>,
        audio: AudioManager,
        mut display: D,
    ) -> Self {
        for warning in tuning.validate() {
            log::warn!("Tuning: {}", warning);
        }

        let high_score = HighScore::load(store.as_ref());
        let clock = FixedStep::new(tuning.tick_hz, MAX_SUBSTEPS);
        let state = GameState::new(tuning, seed, high_score.best);

        display.show_best(high_score.best);
        display.show_score(0);
        display.show_start();
        log::info!("Game initialized with seed: {}", seed);

        Self {
            state,
            high_score,
            store,
            audio,
            display,
            timers: Timers::new(),
            clock,
            controls: Vec::new(),
            autopilot: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn high_score(&self) -> HighScore {
        self.high_score
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Queue a physical control for the next tick. Its meaning depends on
    /// the phase at the moment it is applied, not when it was received.
    pub fn control(&mut self, control: Control) {
        self.controls.push(control);
    }

    /// Host window gained or lost focus
    pub fn focus_changed(&mut self, focused: bool) {
        log::debug!("Focus {}", if focused { "gained" } else { "lost" });
        self.audio.set_focused(focused);
    }

    /// Apply new preferences to the audio output and persist them
    pub fn update_settings(&mut self, settings: &Settings) {
        self.audio.apply_settings(settings);
        settings.save(self.store.as_mut());
    }

    /// Run the simulation for a wall-clock frame delta (seconds).
    /// Returns the number of ticks executed.
    pub fn frame(&mut self, dt: f64) -> u32 {
        // Timers first so anything scheduled this frame counts from now
        self.advance_timers(dt * 1000.0);
        let ticks = self.clock.advance(dt);
        for _ in 0..ticks {
            self.step();
        }
        ticks
    }

    /// Exactly one simulation tick, then event dispatch
    pub fn step(&mut self) {
        for control in std::mem::take(&mut self.controls) {
            if let Some(input) = control.to_input(self.state.phase) {
                apply_input(&mut self.state, input);
            }
        }

        let mut input = TickInput::default();
        if self.autopilot {
            if let Some(autopilot) = self.autopilot_input() {
                input.push(autopilot);
            }
        }
        tick(&mut self.state, &input);

        self.dispatch_events();
    }

    /// Advance host time for deferred effects (milliseconds)
    pub fn advance_timers(&mut self, elapsed_ms: f64) {
        for tone in self.timers.advance(elapsed_ms) {
            self.audio.play(tone);
        }
    }

    /// Draw list for the current state
    pub fn scene(&self) -> Scene {
        Scene::build(&self.state)
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Started => self.display.hide_start(),
                GameEvent::Flapped => self.audio.play(Tone::Flap),
                GameEvent::Scored { score } => {
                    self.audio.play(Tone::Score);
                    self.display.show_score(score);
                }
                GameEvent::Hit { .. } => {
                    self.audio.play(Tone::Hit);
                    self.timers
                        .after(self.state.tuning.die_tone_delay_ms, Tone::Die);
                }
                GameEvent::GameOver {
                    final_score,
                    best_score,
                    new_best,
                } => {
                    self.high_score.record(final_score);
                    // Every run is counted, not only new bests
                    self.high_score.save(self.store.as_mut());
                    if new_best {
                        self.display.show_best(best_score);
                    }
                    self.display.show_game_over(final_score, best_score);
                }
                GameEvent::Restarted => {
                    self.display.show_score(0);
                    self.display.hide_game_over();
                    self.display.show_start();
                }
            }
        }
    }

    /// Flap whenever the avatar sinks below the next gap
    fn autopilot_input(&self) -> Option<Input> {
        let state = &self.state;
        match state.phase {
            GamePhase::Start => Some(Input::Begin),
            GamePhase::Playing => {
                let avatar = &state.avatar;
                let target = state
                    .field
                    .next_ahead_of(avatar.pos.x - avatar.radius, state.tuning.obstacle_width)
                    .map(|p| p.gap_center())
                    .unwrap_or(state.tuning.avatar_start_y);
                (avatar.vel > 0.0 && avatar.pos.y > target + AUTOPILOT_AIM_OFFSET)
                    .then_some(Input::Begin)
            }
            GamePhase::Over => None,
        }
    }
}
