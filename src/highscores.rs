//! Best-score record
//!
//! A single scalar that survives across sessions. Load defaults to 0 when
//! absent or unreadable; save failures are logged, never propagated.

use serde::{Deserialize, Serialize};

use crate::persistence::{Store, StoreError};

/// Best score and a little bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u32,
    /// Completed runs (game-overs) recorded
    #[serde(default)]
    pub runs: u32,
}

/// On-disk forms we accept: the full record, or a bare number as older
/// saves wrote it.
#[derive(Deserialize)]
#[serde(untagged)]
enum Stored {
    Record(HighScore),
    Bare(u32),
}

impl HighScore {
    /// Storage key
    const STORAGE_KEY: &'static str = "flappy_highscore";

    pub fn new(best: u32) -> Self {
        Self { best, runs: 0 }
    }

    /// Record a finished run. Returns true if it set a new best.
    pub fn record(&mut self, final_score: u32) -> bool {
        self.runs = self.runs.saturating_add(1);
        if final_score > self.best {
            self.best = final_score;
            true
        } else {
            false
        }
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let stored: Stored = serde_json::from_str(json.trim())?;
        Ok(match stored {
            Stored::Record(record) => record,
            Stored::Bare(best) => Self::new(best),
        })
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load from a store, falling back to 0
    pub fn load(store: &dyn Store) -> Self {
        match store.read(Self::STORAGE_KEY) {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(record) => {
                    log::info!("Loaded best score {}", record.best);
                    record
                }
                Err(e) => {
                    log::warn!("Ignoring unreadable high score: {}", e);
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                Self::default()
            }
            Err(e) => {
                log::warn!("High score storage unavailable: {}", e);
                Self::default()
            }
        }
    }

    /// Save to a store; errors are logged and swallowed
    pub fn save(&self, store: &mut dyn Store) {
        let result = self
            .to_json()
            .and_then(|json| store.write(Self::STORAGE_KEY, &json));
        match result {
            Ok(()) => log::info!("High score saved ({})", self.best),
            Err(e) => log::warn!("Failed to save high score: {}", e),
        }
    }
}
