//! Autoplay timer: one owned, cancellable deadline
//!
//! The timer never runs in the background. The event loop calls
//! [`AutoplayTimer::poll`] with the current instant; a due poll clears the
//! deadline and sets the next one in the same move, so at most one tick is
//! ever pending and a cancelled timer can never fire late.

use std::time::{Duration, Instant};

/// Autoplay speed, a small fixed set of intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    Slow,
    Medium,
    Fast,
    VeryFast,
}

impl Speed {
    /// Delay between consecutive ticks.
    pub fn interval(self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(800),
            Speed::Medium => Duration::from_millis(400),
            Speed::Fast => Duration::from_millis(150),
            Speed::VeryFast => Duration::from_millis(50),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Medium => "medium",
            Speed::Fast => "fast",
            Speed::VeryFast => "very fast",
        }
    }
}

/// The single timer handle owned by a session.
///
/// `deadline` is `Some` only while playback is running; every exit from the
/// playing state cancels it before doing anything else.
#[derive(Debug)]
pub struct AutoplayTimer {
    deadline: Option<Instant>,
    speed: Speed,
}

impl AutoplayTimer {
    pub fn new(speed: Speed) -> Self {
        AutoplayTimer {
            deadline: None,
            speed,
        }
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Change speed. An already-armed deadline keeps its old due time; the
    /// new interval applies from the next tick on.
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    /// Schedule the next tick relative to `now`, replacing any pending one.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.speed.interval());
    }

    /// Drop the pending tick, if any. Idempotent.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True once per due deadline. A due poll reschedules immediately, so a
    /// caller that keeps polling gets evenly spaced ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.speed.interval());
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_fires_once_per_interval() {
        let start = Instant::now();
        let mut timer = AutoplayTimer::new(Speed::Medium);
        timer.arm(start);

        assert!(!timer.poll(start));
        assert!(timer.poll(start + Duration::from_millis(400)));
        // Rescheduled against the poll instant, not the old deadline
        assert!(!timer.poll(start + Duration::from_millis(500)));
        assert!(timer.poll(start + Duration::from_millis(800)));
    }

    #[test]
    fn cancel_drops_pending_tick() {
        let start = Instant::now();
        let mut timer = AutoplayTimer::new(Speed::Fast);
        timer.arm(start);
        timer.cancel();
        assert!(!timer.is_armed());
        assert!(!timer.poll(start + Duration::from_secs(10)));
    }

    #[test]
    fn speed_change_applies_from_next_tick() {
        let start = Instant::now();
        let mut timer = AutoplayTimer::new(Speed::Slow);
        timer.arm(start);
        timer.set_speed(Speed::VeryFast);

        // Old deadline unchanged
        assert!(!timer.poll(start + Duration::from_millis(100)));
        assert!(timer.poll(start + Duration::from_millis(800)));
        // Next tick uses the new interval
        assert!(timer.poll(start + Duration::from_millis(860)));
    }
}
