//! Wall-clock scheduler backed by Tokio timers.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::trace;

use super::{Scheduler, TimerId, MIN_INTERVAL};

/// Runs each timer as a Tokio task that sends its id on a channel.
///
/// The host reads the receiver returned by [`TokioScheduler::new`] and
/// hands each id to the timer's owner. Timers must be scheduled from
/// within a Tokio runtime. Cancelling aborts the task; an id already
/// queued on the channel may still arrive afterwards.
#[derive(Debug)]
pub struct TokioScheduler {
    next_id: Cell<u64>,
    tasks: RefCell<HashMap<TimerId, JoinHandle<()>>>,
    ticks: mpsc::UnboundedSender<TimerId>,
}

impl TokioScheduler {
    /// Create a scheduler and the receiver its ticks arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerId>) {
        let (ticks, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            next_id: Cell::new(0),
            tasks: RefCell::new(HashMap::new()),
            ticks,
        };
        (scheduler, rx)
    }

    /// Number of timers not yet cancelled.
    pub fn active_timers(&self) -> usize {
        self.tasks.borrow().len()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_repeating(&self, interval: Duration) -> TimerId {
        let id = TimerId::new(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);

        let period = interval.max(MIN_INTERVAL);
        let tx = self.ticks.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(id).is_err() {
                    break;
                }
            }
        });

        trace!(timer = %id, period_ms = period.as_millis() as u64, "timer scheduled");
        self.tasks.borrow_mut().insert(id, handle);
        id
    }

    fn cancel(&self, timer: TimerId) {
        if let Some(handle) = self.tasks.borrow_mut().remove(&timer) {
            handle.abort();
            trace!(timer = %timer, "timer cancelled");
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.get_mut().drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_arrive_each_interval() {
        let (scheduler, mut ticks) = TokioScheduler::new();
        let id = scheduler.schedule_repeating(Duration::from_secs(5));

        let start = Instant::now();
        assert_eq!(ticks.recv().await, Some(id));
        assert_eq!(start.elapsed(), Duration::from_secs(5));
        assert_eq!(ticks.recv().await, Some(id));
        assert_eq!(start.elapsed(), Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let (scheduler, mut ticks) = TokioScheduler::new();
        let id = scheduler.schedule_repeating(Duration::from_secs(1));
        assert_eq!(ticks.recv().await, Some(id));

        scheduler.cancel(id);
        scheduler.cancel(id);
        assert_eq!(scheduler.active_timers(), 0);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(ticks.try_recv().is_err());
    }
}
