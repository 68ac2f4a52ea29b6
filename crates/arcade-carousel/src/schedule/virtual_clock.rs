//! Deterministic virtual-time scheduler.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use super::{Scheduler, TimerId, MIN_INTERVAL};

#[derive(Debug, Clone, Copy)]
struct Repeating {
    interval: Duration,
    next_due: Duration,
}

#[derive(Debug, Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerId, Repeating>,
}

/// Scheduler driven by explicit calls instead of wall-clock time.
///
/// Clones share one clock, so a test can hold a handle while a
/// controller owns another.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    state: Rc<RefCell<ClockState>>,
}

impl VirtualClock {
    /// Create a clock at time zero with no timers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of timers not yet cancelled.
    pub fn active_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Fire the earliest timer due at or before `deadline`.
    ///
    /// Moves the clock to that timer's due time and returns its id. When
    /// nothing is due, moves the clock to `deadline` and returns `None`.
    /// Ties go to the older timer.
    ///
    /// Because the clock advances one tick per call, a timer cancelled or
    /// scheduled while handling a tick is honoured by the next call.
    pub fn next_tick(&self, deadline: Duration) -> Option<TimerId> {
        let mut state = self.state.borrow_mut();
        let due = state
            .timers
            .iter()
            .filter(|(_, t)| t.next_due <= deadline)
            .min_by_key(|(id, t)| (t.next_due, **id))
            .map(|(id, _)| *id);

        match due {
            Some(id) => {
                let timer = state.timers.get_mut(&id)?;
                let fired_at = timer.next_due;
                timer.next_due += timer.interval;
                state.now = state.now.max(fired_at);
                Some(id)
            }
            None => {
                state.now = state.now.max(deadline);
                None
            }
        }
    }

    /// Advance by `by` and return every tick due in that window, in order.
    ///
    /// Ticks are collected up front, so timers changed by the caller
    /// while handling them are not reflected. Use [`next_tick`] to
    /// interleave handling with time.
    ///
    /// [`next_tick`]: VirtualClock::next_tick
    pub fn advance(&self, by: Duration) -> Vec<TimerId> {
        let deadline = self.now() + by;
        std::iter::from_fn(|| self.next_tick(deadline)).collect()
    }
}

impl Scheduler for VirtualClock {
    fn schedule_repeating(&self, interval: Duration) -> TimerId {
        let mut state = self.state.borrow_mut();
        let interval = interval.max(MIN_INTERVAL);
        let id = TimerId::new(state.next_id);
        state.next_id += 1;
        let next_due = state.now + interval;
        state.timers.insert(id, Repeating { interval, next_due });
        id
    }

    fn cancel(&self, timer: TimerId) {
        self.state.borrow_mut().timers.remove(&timer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_repeating_ticks() {
        let clock = VirtualClock::new();
        let id = clock.schedule_repeating(5 * SECOND);

        assert!(clock.advance(4 * SECOND).is_empty());
        assert_eq!(clock.advance(SECOND), vec![id]);
        assert_eq!(clock.advance(10 * SECOND), vec![id, id]);
        assert_eq!(clock.now(), 15 * SECOND);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let clock = VirtualClock::new();
        let id = clock.schedule_repeating(SECOND);

        clock.cancel(id);
        clock.cancel(id);
        assert_eq!(clock.active_timers(), 0);
        assert!(clock.advance(3 * SECOND).is_empty());
    }

    #[test]
    fn test_ticks_interleave_in_time_order() {
        let clock = VirtualClock::new();
        let slow = clock.schedule_repeating(3 * SECOND);
        let fast = clock.schedule_repeating(2 * SECOND);

        assert_eq!(clock.advance(6 * SECOND), vec![fast, slow, fast, slow, fast]);
    }

    #[test]
    fn test_next_tick_moves_clock_to_due_time() {
        let clock = VirtualClock::new();
        let id = clock.schedule_repeating(2 * SECOND);

        assert_eq!(clock.next_tick(5 * SECOND), Some(id));
        assert_eq!(clock.now(), 2 * SECOND);
        assert_eq!(clock.next_tick(5 * SECOND), Some(id));
        assert_eq!(clock.now(), 4 * SECOND);
        assert_eq!(clock.next_tick(5 * SECOND), None);
        assert_eq!(clock.now(), 5 * SECOND);
    }

    #[test]
    fn test_zero_interval_is_raised() {
        let clock = VirtualClock::new();
        clock.schedule_repeating(Duration::ZERO);
        assert_eq!(clock.advance(Duration::from_millis(3)).len(), 3);
    }
}
