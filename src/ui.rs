//! Score and screen overlays
//!
//! Pure presentation: the core never reads anything back from a display.

/// What a host must be able to show
pub trait Display {
    fn show_score(&mut self, score: u32);
    fn show_best(&mut self, best: u32);
    fn show_game_over(&mut self, final_score: u32, best_score: u32);
    fn hide_game_over(&mut self);
    fn show_start(&mut self);
    fn hide_start(&mut self);
}

/// In-memory overlay state, mirroring the DOM elements of a web host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score_text: String,
    pub best_text: String,
    pub start_visible: bool,
    pub game_over_visible: bool,
    pub final_score_text: String,
    pub best_score_text: String,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            score_text: "0".to_string(),
            best_text: "Best: 0".to_string(),
            start_visible: true,
            game_over_visible: false,
            final_score_text: String::new(),
            best_score_text: String::new(),
        }
    }
}

impl Display for Hud {
    fn show_score(&mut self, score: u32) {
        self.score_text = score.to_string();
    }

    fn show_best(&mut self, best: u32) {
        self.best_text = format!("Best: {best}");
    }

    fn show_game_over(&mut self, final_score: u32, best_score: u32) {
        self.game_over_visible = true;
        self.final_score_text = final_score.to_string();
        self.best_score_text = best_score.to_string();
    }

    fn hide_game_over(&mut self) {
        self.game_over_visible = false;
    }

    fn show_start(&mut self) {
        self.start_visible = true;
    }

    fn hide_start(&mut self) {
        self.start_visible = false;
    }
}

/// Display for headless runs: every change goes to the log
#[derive(Debug, Default)]
pub struct LogDisplay;

impl Display for LogDisplay {
    fn show_score(&mut self, score: u32) {
        log::info!("Score: {}", score);
    }

    fn show_best(&mut self, best: u32) {
        log::info!("Best: {}", best);
    }

    fn show_game_over(&mut self, final_score: u32, best_score: u32) {
        log::info!("GAME OVER - score {}, best {}", final_score, best_score);
    }

    fn hide_game_over(&mut self) {}

    fn show_start(&mut self) {
        log::info!("Press Space or click to start");
    }

    fn hide_start(&mut self) {}
}
