/// One-shot shoot-cooldown timer.
///
/// Armed when the player fires, it elapses on wall-clock time rather than
/// frame count.  The owner polls it; once the deadline has passed `poll`
/// reports it exactly once and the timer disarms.  `cancel` disarms without
/// firing.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cooldown {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Cooldown {
    pub fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Start (or restart) the timer from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` once, on the first poll at or after the deadline.
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
