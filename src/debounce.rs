//! Trailing-edge debouncer for container-resize refreshes.

use std::time::{Duration, Instant};

/// Collapses bursts of requests into a single firing once the quiet
/// period has elapsed. Size one: a pending request is replaced, never
/// queued. Time is caller-supplied so tests stay deterministic.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Schedules (or reschedules) a firing one quiet period from `now`.
    pub fn request(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    /// True at most once per request batch, after the quiet period.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
