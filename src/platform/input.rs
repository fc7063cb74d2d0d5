//! Physical controls
//!
//! Space begins, flaps and restarts; a click on the canvas begins and flaps
//! but never restarts; the restart button only restarts.

use crate::sim::{GamePhase, Input};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Space,
    Click,
    RestartButton,
}

impl Control {
    /// Translate a control into a simulation input for the current phase
    pub fn to_input(self, phase: GamePhase) -> Option<Input> {
        match (self, phase) {
            (Control::Space, GamePhase::Over) => Some(Input::Restart),
            (Control::Space, _) => Some(Input::Begin),
            (Control::Click, GamePhase::Over) => None,
            (Control::Click, _) => Some(Input::Begin),
            (Control::RestartButton, _) => Some(Input::Restart),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Space" | " " => Some(Control::Space),
            _ => None,
        }
    }
}
