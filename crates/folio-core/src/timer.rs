//! Deadline timers for timed UI transitions.
//!
//! Controllers never read a clock. The host passes the current [`Timestamp`]
//! into every call that can start or observe a timer, and polls controllers
//! with `tick(now)`. A timer is a single slot: arming it again replaces the
//! previous deadline, so a stale callback can never fire.

use std::time::Duration;

/// Time elapsed since an epoch chosen by the host (usually when the UI mounted).
pub type Timestamp = Duration;

/// One-shot timer holding at most one pending deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Timestamp>,
}

impl Timer {
    /// Create a disarmed timer.
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to fire `delay` after `now`, replacing any pending deadline.
    pub fn arm(&mut self, now: Timestamp, delay: Duration) {
        self.deadline = Some(now.checked_add(delay).unwrap_or(Duration::MAX));
    }

    /// Disarm the timer. Returns true if a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Check if a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any.
    pub fn deadline(&self) -> Option<Timestamp> {
        self.deadline
    }

    /// Time left until the deadline, saturating at zero.
    pub fn remaining(&self, now: Timestamp) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_sub(now))
    }

    /// Returns true exactly once, when `now` has reached the deadline.
    pub fn poll(&mut self, now: Timestamp) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Repeating timer with a fixed period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    next: Option<Timestamp>,
}

impl Interval {
    /// Create a stopped interval. A zero period is raised to one millisecond.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next: None,
        }
    }

    /// The interval period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start (or restart) the interval; the first tick is one period after `now`.
    pub fn start(&mut self, now: Timestamp) {
        self.next = Some(now.checked_add(self.period).unwrap_or(Duration::MAX));
    }

    /// Stop the interval. Returns true if it was running.
    pub fn stop(&mut self) -> bool {
        self.next.take().is_some()
    }

    /// Check if the interval is running.
    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// Deadline of the next tick, if running.
    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.next
    }

    /// Number of whole periods that elapsed up to `now` since the last poll.
    ///
    /// Advances the schedule past `now`, so each period is reported once.
    pub fn poll(&mut self, now: Timestamp) -> u32 {
        let Some(next) = self.next else {
            return 0;
        };
        if now < next {
            return 0;
        }

        let periods = (now - next).as_nanos() / self.period.as_nanos() + 1;
        let fired = u32::try_from(periods).unwrap_or(u32::MAX);
        let advance = self.period.saturating_mul(fired);
        self.next = Some(next.checked_add(advance).unwrap_or(Duration::MAX));
        fired
    }
}

/// Earliest of two optional deadlines.
pub fn earliest(a: Option<Timestamp>, b: Option<Timestamp>) -> Option<Timestamp> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_timer_fires_once() {
        let mut timer = Timer::new();
        timer.arm(ms(0), ms(300));

        assert!(!timer.poll(ms(299)));
        assert!(timer.poll(ms(300)));
        assert!(!timer.poll(ms(301)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_timer_rearm_replaces_deadline() {
        let mut timer = Timer::new();
        timer.arm(ms(0), ms(300));
        timer.arm(ms(200), ms(300));

        assert_eq!(timer.deadline(), Some(ms(500)));
        assert!(!timer.poll(ms(300)));
        assert!(timer.poll(ms(500)));
    }

    #[test]
    fn test_timer_cancel() {
        let mut timer = Timer::new();
        timer.arm(ms(0), ms(10));

        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert!(!timer.poll(ms(1000)));
    }

    #[test]
    fn test_timer_remaining() {
        let mut timer = Timer::new();
        assert_eq!(timer.remaining(ms(0)), None);

        timer.arm(ms(100), ms(300));
        assert_eq!(timer.remaining(ms(250)), Some(ms(150)));
        assert_eq!(timer.remaining(ms(900)), Some(ms(0)));
    }

    #[test]
    fn test_interval_counts_elapsed_periods() {
        let mut interval = Interval::new(ms(5000));
        interval.start(ms(1000));

        assert_eq!(interval.poll(ms(5999)), 0);
        assert_eq!(interval.poll(ms(6000)), 1);
        assert_eq!(interval.poll(ms(6001)), 0);
        // Two more periods elapse between polls
        assert_eq!(interval.poll(ms(16000)), 2);
        assert_eq!(interval.next_deadline(), Some(ms(21000)));
    }

    #[test]
    fn test_interval_stop_prevents_ticks() {
        let mut interval = Interval::new(ms(5000));
        interval.start(ms(0));
        assert!(interval.stop());

        assert_eq!(interval.poll(ms(60_000)), 0);
        assert!(!interval.is_running());
    }

    #[test]
    fn test_interval_restart_begins_fresh_period() {
        let mut interval = Interval::new(ms(5000));
        interval.start(ms(0));
        interval.stop();
        interval.start(ms(4000));

        assert_eq!(interval.poll(ms(5000)), 0);
        assert_eq!(interval.poll(ms(9000)), 1);
    }

    #[test]
    fn test_zero_period_is_raised() {
        let interval = Interval::new(Duration::ZERO);
        assert_eq!(interval.period(), ms(1));
    }

    #[test]
    fn test_earliest() {
        assert_eq!(earliest(Some(ms(5)), Some(ms(3))), Some(ms(3)));
        assert_eq!(earliest(None, Some(ms(3))), Some(ms(3)));
        assert_eq!(earliest(Some(ms(5)), None), Some(ms(5)));
        assert_eq!(earliest(None, None), None);
    }
}
