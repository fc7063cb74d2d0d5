//! Flappy Arcade entry point
//!
//! Native builds run the simulation headlessly with the autopilot at the
//! fixed tick rate, logging score and state changes.
//!
//! Options:
//!   --seed <u64>      RNG seed (default: random)
//!   --ticks <n>       ticks to simulate (default: 3600)
//!   --runs <n>        restart after game over until this many runs end (default: 1)
//!   --tuning <path>   JSON tuning override
//!   --data <dir>      directory for the best score and settings

use flappy_arcade::audio::{AudioManager, LogSink};
use flappy_arcade::persistence::{FileStore, MemoryStore, Store};
use flappy_arcade::platform::Control;
use flappy_arcade::sim::GamePhase;
use flappy_arcade::ui::LogDisplay;
use flappy_arcade::{Game, Settings, Tuning};

struct Options {
    seed: Option<u64>,
    ticks: u64,
    runs: u32,
    tuning: Option<String>,
    data: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            seed: None,
            ticks: 3600,
            runs: 1,
            tuning: None,
            data: None,
        }
    }
}

fn parse_args() -> Options {
    let mut options = Options::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let value = args.next();
        match (arg.as_str(), value) {
            ("--seed", Some(v)) => options.seed = v.parse().ok(),
            ("--ticks", Some(v)) => options.ticks = v.parse().unwrap_or(options.ticks),
            ("--runs", Some(v)) => options.runs = v.parse().unwrap_or(options.runs),
            ("--tuning", Some(v)) => options.tuning = Some(v),
            ("--data", Some(v)) => options.data = Some(v),
            (other, _) => log::warn!("Ignoring argument {}", other),
        }
    }
    options
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Arcade (headless) starting...");

    let options = parse_args();

    let tuning = match &options.tuning {
        Some(path) => Tuning::load(path).unwrap_or_else(|e| {
            log::warn!("Could not load tuning from {}: {}; using defaults", path, e);
            Tuning::default()
        }),
        None => Tuning::default(),
    };

    let store: Box<dyn Store> = match &options.data {
        Some(dir) => Box::new(FileStore::new(dir)),
        None => Box::new(MemoryStore::new()),
    };

    let settings = Settings::load(store.as_ref());
    let audio = AudioManager::new(Box::new(LogSink));

    let seed = options.seed.unwrap_or_else(rand::random);
    let mut game = Game::new(tuning, seed, store, audio, LogDisplay);
    // Writes the defaults on first launch so they can be edited by hand
    game.update_settings(&settings);
    game.autopilot = true;

    let dt = 1.0 / game.state().tuning.tick_hz.max(1) as f64;
    let mut runs_ended = 0;
    let mut last_phase = game.phase();

    for _ in 0..options.ticks {
        game.frame(dt);

        let phase = game.phase();
        if phase != last_phase {
            if phase == GamePhase::Over {
                runs_ended += 1;
                if runs_ended >= options.runs {
                    break;
                }
                game.control(Control::RestartButton);
            }
            last_phase = phase;
        }
    }

    // Let the delayed die tone play out
    game.advance_timers(game.state().tuning.die_tone_delay_ms as f64);

    let scene = game.scene();
    log::info!(
        "Stopped after {} frames: score {}, best {}, {} triangles in the last frame",
        game.state().frames,
        game.state().score,
        game.high_score().best,
        scene.triangle_count()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `Game` from their own animation-frame callback
}
