//! Repeating-timer scheduling.
//!
//! A scheduler only hands out timer ids and later reports which id is
//! due. The host delivers due ids back to the owner of the timer, which
//! decides whether the tick is still current.

mod tokio_interval;
mod virtual_clock;

use std::fmt;
use std::time::Duration;

pub use tokio_interval::TokioScheduler;
pub use virtual_clock::VirtualClock;

/// Shortest interval a scheduler will run. Shorter requests are raised
/// to this.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Identifies one scheduled repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// Cancellable repeating-timer capability.
pub trait Scheduler {
    /// Start a timer that fires every `interval`, first after one full
    /// interval.
    fn schedule_repeating(&self, interval: Duration) -> TimerId;

    /// Stop a timer. Cancelling an unknown or already-cancelled id is a
    /// no-op.
    fn cancel(&self, timer: TimerId);
}
