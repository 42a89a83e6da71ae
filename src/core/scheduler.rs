//! Autoplay scheduler - a polled deadline timer.
//!
//! No background thread: the host calls `tick()` from its update loop
//! and fires an advance when it returns a direction. Re-arming always
//! replaces the previous deadline, so overlapping timers cannot exist,
//! and a stopped scheduler can never fire. The scheduler keeps no
//! record of why it was stopped - hover and focus policies live in the
//! host.

use log::trace;
use std::time::{Duration, Instant};

/// Cancellable periodic timer driving automatic advances.
#[derive(Debug, Clone, Default)]
pub struct Autoplay {
    interval: Duration,
    reverse: bool,
    next_fire: Option<Instant>,
}

impl Autoplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer. A prior deadline, if any, is discarded.
    pub fn start(&mut self, interval: Duration, reverse: bool) {
        self.interval = interval;
        self.reverse = reverse;
        self.next_fire = Some(Instant::now() + interval);
        trace!(
            "autoplay armed: every {}ms, reverse={}",
            interval.as_millis(),
            reverse
        );
    }

    /// Disarm the timer. Idempotent.
    pub fn stop(&mut self) {
        if self.next_fire.is_some() {
            trace!("autoplay stopped");
        }
        self.next_fire = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_fire.is_some()
    }

    /// Returns the advance direction when an interval has elapsed,
    /// at most once per call, and re-arms from now.
    pub fn tick(&mut self) -> Option<bool> {
        let due = self.next_fire?;
        let now = Instant::now();
        if now >= due {
            self.next_fire = Some(now + self.interval);
            Some(self.reverse)
        } else {
            None
        }
    }
}
