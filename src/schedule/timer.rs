//! A pausable interval timer driven by elapsed time.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Periodic timer that fires every `period` of accumulated active time.
///
/// `residual` is the active time since the last fire. Stopping keeps it, so a
/// stop/start pair neither loses nor gains time; cancelling resets it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalTimer {
    period: Duration,
    residual: Duration,
    active: bool,
}

impl IntervalTimer {
    /// Create an inactive timer.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        assert!(!period.is_zero(), "timer period must be non-zero");
        Self {
            period,
            residual: Duration::ZERO,
            active: false,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Active time accumulated since the last fire.
    #[must_use]
    pub fn residual(&self) -> Duration {
        self.residual
    }

    /// Time until the next fire, or `None` while inactive.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.active.then(|| self.period.saturating_sub(self.residual))
    }

    /// Activate, resuming from the current residual.
    pub fn start(&mut self) {
        self.active = true;
    }

    /// Deactivate, keeping the residual.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Deactivate and forget the residual.
    pub fn cancel(&mut self) {
        self.active = false;
        self.residual = Duration::ZERO;
    }

    /// Accumulate `elapsed` active time without crossing a fire.
    ///
    /// Callers must not pass more than [`remaining`](Self::remaining).
    pub(super) fn accumulate(&mut self, elapsed: Duration) {
        if self.active {
            self.residual = (self.residual + elapsed).min(self.period);
        }
    }

    /// Consume a due fire, if any.
    pub(super) fn take_fire(&mut self) -> bool {
        if self.active && self.residual >= self.period {
            self.residual = Duration::ZERO;
            true
        } else {
            false
        }
    }
}
