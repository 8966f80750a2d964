use std::time::{Duration, Instant};

/// Gate that lets one simulation step through per elapsed `interval`.
///
/// Time is supplied by the caller so the gate works with any monotonic
/// source and can be driven deterministically.
#[derive(Debug, Clone, Copy)]
pub struct FixedStep {
    interval: Duration,
    last_step: Instant,
}

impl FixedStep {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_step: now,
        }
    }

    /// Returns true when a step is due, and restarts the measurement if so
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_step) >= self.interval {
            self.last_step = now;
            true
        } else {
            false
        }
    }

    /// Restart the measurement without stepping
    pub fn restart(&mut self, now: Instant) {
        self.last_step = now;
    }
}
