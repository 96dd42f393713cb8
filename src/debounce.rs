//! Delay-and-coalesce for editor changes.
//!
//! The debouncer holds at most one pending value. Every push replaces it and
//! restarts the quiescence window, so a burst of edits collapses into the
//! last one. Callers pass the current time in, which keeps the type
//! deterministic under test and lets the event loop sleep until
//! [`Debouncer::deadline`].

use std::time::{Duration, Instant};

/// Coalesces rapid updates into a single value delivered after `delay`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<T>,
    pending_since: Option<Instant>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            pending_since: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace the pending value and restart the window at `now`.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(value);
        self.pending_since = Some(now);
    }

    /// When the pending value becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending_since.map(|since| since + self.delay)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending value once the quiescence window has elapsed.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(deadline) if now >= deadline => {
                self.pending_since = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// Discard the pending value without delivering it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending_since = None;
        self.pending.take()
    }
}
