//! Interval gating for fade ticks.
//!
//! Portable polling without async/await or platform timers. The host loop
//! asks whether a tick is due; a missed deadline delays the next check and
//! never produces a backlog of ticks.

use embassy_time::{Duration, Instant};

/// Outcome of one scheduler pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassResult {
    /// Whether the fade driver advanced during this pass.
    pub ticked: bool,
    /// Earliest instant at which the next tick can run.
    pub next_deadline: Instant,
}

/// Tracks when a periodic action last ran.
///
/// The action is due once strictly more than `interval` has elapsed since it
/// last ran. The first reference point is the clock origin, so right after
/// boot the first tick waits for one full interval.
#[derive(Debug, Clone, Copy)]
pub struct IntervalGate {
    last: Instant,
}

impl IntervalGate {
    pub const fn new() -> Self {
        Self {
            last: Instant::from_ticks(0),
        }
    }

    /// Check whether more than `interval` has passed since the last run.
    ///
    /// A clock reading older than the last run counts as no time elapsed.
    pub fn is_due(&self, now: Instant, interval: Duration) -> bool {
        now.saturating_duration_since(self.last) > interval
    }

    /// Record a run at `now`.
    pub fn mark(&mut self, now: Instant) {
        self.last = now;
    }

    /// Mark and return `true` if the action is due.
    pub fn poll(&mut self, now: Instant, interval: Duration) -> bool {
        if !self.is_due(now, interval) {
            return false;
        }
        self.mark(now);
        true
    }

    /// Instant of the last run.
    pub const fn last(&self) -> Instant {
        self.last
    }

    /// First instant at which [`IntervalGate::is_due`] returns `true`.
    pub fn next_deadline(&self, interval: Duration) -> Instant {
        interval
            .checked_add(Duration::from_ticks(1))
            .and_then(|span| self.last.checked_add(span))
            .unwrap_or(Instant::MAX)
    }
}

impl Default for IntervalGate {
    fn default() -> Self {
        Self::new()
    }
}
