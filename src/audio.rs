//! Procedural tone effects
//!
//! Each game sound is a single oscillator burst - no external files needed.
//! Playback goes through a [`ToneSink`]; failures are logged and swallowed
//! so a missing audio device can never stall the tick loop.

use std::cell::RefCell;
use std::rc::Rc;

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Flap impulse applied
    Flap,
    /// Obstacle cleared
    Score,
    /// Fatal collision impact
    Hit,
    /// Follows `Hit` after a short delay
    Die,
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Sawtooth,
}

/// Oscillator parameters for one tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub tone: Tone,
    pub waveform: Waveform,
    pub frequency_hz: f32,
    pub duration_ms: u32,
    pub gain: f32,
}

/// Base gain for every tone before volume settings apply
const BASE_GAIN: f32 = 0.1;

impl Tone {
    pub fn spec(self) -> ToneSpec {
        let (waveform, frequency_hz, duration_ms) = match self {
            Tone::Flap => (Waveform::Sine, 800.0, 100),
            Tone::Score => (Waveform::Sine, 1200.0, 200),
            Tone::Hit => (Waveform::Sawtooth, 200.0, 300),
            Tone::Die => (Waveform::Sawtooth, 100.0, 500),
        };
        ToneSpec {
            tone: self,
            waveform,
            frequency_hz,
            duration_ms,
            gain: BASE_GAIN,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    #[error("audio device unavailable")]
    DeviceUnavailable,
    #[error("playback failed: {0}")]
    Playback(String),
}

/// Something that can actually make noise
pub trait ToneSink {
    fn play(&mut self, spec: &ToneSpec) -> Result<(), AudioError>;
}

/// Sink for headless hosts: logs each tone at debug level
#[derive(Debug, Default)]
pub struct LogSink;

impl ToneSink for LogSink {
    fn play(&mut self, spec: &ToneSpec) -> Result<(), AudioError> {
        log::debug!(
            "tone {:?}: {:?} {} Hz for {} ms at gain {:.3}",
            spec.tone,
            spec.waveform,
            spec.frequency_hz,
            spec.duration_ms,
            spec.gain
        );
        Ok(())
    }
}

/// Sink that remembers what was played; clones share the same log
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    played: Rc<RefCell<Vec<ToneSpec>>>,
}

impl RecordingSink {
    pub fn tones(&self) -> Vec<Tone> {
        self.played.borrow().iter().map(|s| s.tone).collect()
    }

    pub fn specs(&self) -> Vec<ToneSpec> {
        self.played.borrow().clone()
    }
}

impl ToneSink for RecordingSink {
    fn play(&mut self, spec: &ToneSpec) -> Result<(), AudioError> {
        self.played.borrow_mut().push(*spec);
        Ok(())
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Option<Box<dyn ToneSink>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    mute_on_blur: bool,
    focused: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::silent()
    }
}

impl AudioManager {
    pub fn new(sink: Box<dyn ToneSink>) -> Self {
        Self {
            sink: Some(sink),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            mute_on_blur: true,
            focused: true,
        }
    }

    /// No device: every tone is dropped
    pub fn silent() -> Self {
        Self {
            sink: None,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            mute_on_blur: true,
            focused: true,
        }
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
        self.mute_on_blur = settings.mute_on_blur;
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Host window focus. Losing focus silences tones while
    /// `mute_on_blur` is set.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_silenced(&self) -> bool {
        self.muted || (self.mute_on_blur && !self.focused)
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.is_silenced() {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Fire-and-forget playback
    pub fn play(&mut self, tone: Tone) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(sink) = self.sink.as_mut() else {
            return;
        };

        let mut spec = tone.spec();
        spec.gain *= vol;
        if let Err(e) = sink.play(&spec) {
            log::warn!("Audio not supported ({:?}): {}", tone, e);
        }
    }
}
