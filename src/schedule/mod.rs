//! Explicit timer scheduling for a round.
//!
//! A round runs two independent one-second timers: the countdown and, from
//! level 3, the decoy label timer. Rather than relying on a UI framework's
//! intervals, the host feeds elapsed wall-clock time in and the scheduler
//! reports which timers came due, in chronological order.
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//! use color_hunt::schedule::{Scheduler, TimerKind};
//!
//! let mut scheduler = Scheduler::new(Duration::from_secs(1), Duration::from_secs(1));
//! scheduler.countdown_mut().start();
//!
//! let mut budget = Duration::from_millis(2500);
//! assert_eq!(scheduler.poll(&mut budget), Some(TimerKind::Countdown));
//! assert_eq!(scheduler.poll(&mut budget), Some(TimerKind::Countdown));
//! assert_eq!(scheduler.poll(&mut budget), None);
//! assert_eq!(budget, Duration::ZERO);
//! ```

mod timer;

pub use timer::IntervalTimer;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which timer fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    /// One-second countdown.
    Countdown,
    /// Decoy label redraw.
    Decoy,
}

/// The pair of timers owned by a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheduler {
    countdown: IntervalTimer,
    decoy: IntervalTimer,
}

impl Scheduler {
    #[must_use]
    pub fn new(tick_interval: Duration, decoy_interval: Duration) -> Self {
        Self {
            countdown: IntervalTimer::new(tick_interval),
            decoy: IntervalTimer::new(decoy_interval),
        }
    }

    #[must_use]
    pub fn countdown(&self) -> &IntervalTimer {
        &self.countdown
    }

    pub fn countdown_mut(&mut self) -> &mut IntervalTimer {
        &mut self.countdown
    }

    #[must_use]
    pub fn decoy(&self) -> &IntervalTimer {
        &self.decoy
    }

    pub fn decoy_mut(&mut self) -> &mut IntervalTimer {
        &mut self.decoy
    }

    /// Stop both timers, keeping their residuals.
    pub fn stop_all(&mut self) {
        self.countdown.stop();
        self.decoy.stop();
    }

    /// Cancel both timers.
    pub fn cancel_all(&mut self) {
        self.countdown.cancel();
        self.decoy.cancel();
    }

    /// Whether any timer is active.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.countdown.is_active() || self.decoy.is_active()
    }

    /// Spend `budget` up to the earliest due timer and report it.
    ///
    /// Returns `None` once no active timer comes due within what is left of
    /// the budget; the remainder is then accumulated into the active timers
    /// and `budget` is zero. When both timers come due at the same instant,
    /// the countdown is reported first.
    pub fn poll(&mut self, budget: &mut Duration) -> Option<TimerKind> {
        // A previous call may have left a timer exactly due.
        if let Some(kind) = self.take_due() {
            return Some(kind);
        }

        let next = [self.countdown.remaining(), self.decoy.remaining()]
            .into_iter()
            .flatten()
            .min();

        match next {
            Some(step) if step <= *budget => {
                *budget -= step;
                self.countdown.accumulate(step);
                self.decoy.accumulate(step);
                self.take_due()
            }
            _ => {
                self.countdown.accumulate(*budget);
                self.decoy.accumulate(*budget);
                *budget = Duration::ZERO;
                None
            }
        }
    }

    fn take_due(&mut self) -> Option<TimerKind> {
        if self.countdown.take_fire() {
            Some(TimerKind::Countdown)
        } else if self.decoy.take_fire() {
            Some(TimerKind::Decoy)
        } else {
            None
        }
    }
}
