//! Deferred one-shot events on host time
//!
//! Stands in for `setTimeout`-style scheduling: nothing blocks, the host
//! advances the timers once per frame and handles whatever fired.

/// Pending timers, fired in due order
#[derive(Debug, Clone)]
pub struct Timers<T> {
    now_ms: f64,
    pending: Vec<(f64, T)>,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self {
            now_ms: 0.0,
            pending: Vec::new(),
        }
    }
}

impl<T> Timers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` to fire `delay_ms` from now
    pub fn after(&mut self, delay_ms: u32, event: T) {
        let due = self.now_ms + delay_ms as f64;
        // Keep sorted by due time; equal times keep insertion order
        let idx = self.pending.partition_point(|(t, _)| *t <= due);
        self.pending.insert(idx, (due, event));
    }

    /// Move time forward and return every event that came due
    pub fn advance(&mut self, elapsed_ms: f64) -> Vec<T> {
        self.now_ms += elapsed_ms.max(0.0);
        let due = self.pending.partition_point(|(t, _)| *t <= self.now_ms);
        self.pending.drain(..due).map(|(_, e)| e).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
