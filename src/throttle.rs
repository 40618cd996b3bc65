//! Rate limiting for scroll- and resize-driven recomputation.
//!
//! Both types are clock-free: callers pass `now`, which keeps the frame loop in charge of time
//! and lets tests step through it.

use std::time::{Duration, Instant};

/// Roughly one frame at 60 Hz.
pub const FRAME: Duration = Duration::from_millis(16);

#[derive(Clone, Debug)]
/// Leading-edge throttle that remembers a dropped sample and flushes it later.
///
/// The first hit in a window runs immediately. Hits inside the window are collapsed into one
/// pending sample, which [`Throttle::poll`] releases once the window has passed, so the settled
/// value is always applied even if the last event arrived mid-window.
pub struct Throttle {
    interval: Duration,
    last_run: Option<Instant>,
    pending: bool,
}

impl Throttle {
    #[must_use]
    /// Throttle with the given window.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
            pending: false,
        }
    }

    fn due(&self, now: Instant) -> bool {
        self.last_run
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
    }

    /// Records an event. Returns true when the caller should recompute now.
    pub fn hit(&mut self, now: Instant) -> bool {
        if self.due(now) {
            self.last_run = Some(now);
            self.pending = false;
            true
        } else {
            self.pending = true;
            false
        }
    }

    /// Returns true when a collapsed sample is due and should be applied now.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.pending && self.due(now) {
            self.last_run = Some(now);
            self.pending = false;
            true
        } else {
            false
        }
    }

    #[must_use]
    /// Whether a sample is waiting for the window to close.
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(FRAME)
    }
}

#[derive(Clone, Debug)]
/// Fires once after a quiet period, restarting the wait on every trigger.
pub struct Debounce {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    #[must_use]
    /// Debounce with the given quiet period.
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Records an event and re-arms the timer.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.wait);
    }

    /// Returns true exactly once per burst, after the quiet period.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drops any armed timer, as on teardown.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
#[path = "tests/throttle.rs"]
mod tests;
