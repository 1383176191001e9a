//! Fixed-period poll schedule
//!
//! The schedule never sleeps or spawns timers itself. The main loop asks
//! `tick(now)` once per frame, which keeps tests free of wall-clock waits.

use std::time::{Duration, Instant};

/// Default poll period
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct Poller {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Default for Poller {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

impl Poller {
    /// A stopped poller. Zero intervals are bumped to one millisecond.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Start polling; the first tick at or after `now` fires
    pub fn start_at(&mut self, now: Instant) {
        self.next_due = Some(now);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Make the next tick fire regardless of the schedule. No-op when stopped.
    pub fn trigger(&mut self) {
        if self.is_running() {
            self.next_due = Some(Instant::now());
        }
    }

    /// Whether a poll is due at `now`. Firing reschedules one interval later.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
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
    fn test_stopped_never_fires() {
        let mut poller = Poller::new(Duration::from_secs(1));
        assert!(!poller.is_running());
        assert!(!poller.tick(Instant::now() + Duration::from_secs(60)));
    }

    #[test]
    fn test_fires_immediately_then_each_interval() {
        let t0 = Instant::now();
        let mut poller = Poller::new(Duration::from_secs(1));
        poller.start_at(t0);

        assert!(poller.tick(t0));
        assert!(!poller.tick(t0));
        assert!(!poller.tick(t0 + Duration::from_millis(999)));
        assert!(poller.tick(t0 + Duration::from_millis(1000)));
        assert!(!poller.tick(t0 + Duration::from_millis(1500)));
        assert!(poller.tick(t0 + Duration::from_millis(2000)));
    }

    #[test]
    fn test_late_tick_does_not_burst() {
        let t0 = Instant::now();
        let mut poller = Poller::new(Duration::from_secs(1));
        poller.start_at(t0);
        assert!(poller.tick(t0));
        // a stalled frame fires once, not once per missed interval
        assert!(poller.tick(t0 + Duration::from_secs(10)));
        assert!(!poller.tick(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn test_stop_cancels() {
        let t0 = Instant::now();
        let mut poller = Poller::new(Duration::from_secs(1));
        poller.start_at(t0);
        assert!(poller.tick(t0));
        poller.stop();
        assert!(!poller.tick(t0 + Duration::from_secs(5)));
        poller.trigger();
        assert!(!poller.is_running());
    }

    #[test]
    fn test_trigger_makes_next_tick_due() {
        let mut poller = Poller::new(Duration::from_secs(3600));
        poller.start();
        assert!(poller.tick(Instant::now()));
        assert!(!poller.tick(Instant::now()));
        poller.trigger();
        assert!(poller.tick(Instant::now()));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let t0 = Instant::now();
        let mut poller = Poller::new(Duration::ZERO);
        poller.start_at(t0);
        assert!(poller.tick(t0));
        assert!(!poller.tick(t0));
        assert!(poller.tick(t0 + Duration::from_millis(1)));
    }
}
