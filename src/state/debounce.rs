//! Debounce timer for remote queries.
//!
//! Holds at most one armed deadline. Arming replaces any pending deadline,
//! so a burst of rapid triggers coalesces into a single firing carrying
//! whatever state is current when the timer elapses. Time is passed in
//! explicitly, keeping the type pure and testable; the event loop supplies
//! `Instant::now()` on each tick.

use std::time::{Duration, Instant};

/// Single-deadline debounce timer.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Timer firing `delay` after the most recent arming.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the timer to fire `delay` from `now`. A pending
    /// not-yet-fired deadline is replaced, never queued.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Arm the timer to fire on the next poll, bypassing the delay.
    pub fn arm_immediate(&mut self, now: Instant) {
        self.deadline = Some(now);
    }

    /// Drop any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire if the deadline has passed. Returns true at most once per
    /// arming; firing disarms the timer.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod tests;
