//! Slide position and autoplay arbitration.

use std::time::Duration;

use arcade_core::{Observer, ObserverSet, Subscription};
use tracing::{debug, trace};

use crate::{CarouselError, KeyPress, Scheduler, SwipeDirection, TimerId};

/// Default autoplay interval.
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// Emitted whenever the visible slide is (re)rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChanged {
    pub index: usize,
}

/// Owns the current slide index and the single autoplay timer.
///
/// The index only moves through modular arithmetic, so it always lies
/// in `[0, slide_count)`. At most one timer is outstanding; ticks from
/// any other timer id are dropped.
///
/// Manual navigation (`manual_*`, `handle_key`, `handle_swipe`) stops
/// autoplay, applies exactly one transition, then restarts autoplay so
/// the countdown begins again from the user's action.
pub struct CarouselController<S: Scheduler> {
    slide_count: usize,
    current: usize,
    interval: Duration,
    scheduler: S,
    timer: Option<TimerId>,
    observers: ObserverSet<SlideChanged>,
}

impl<S: Scheduler> CarouselController<S> {
    /// Create a controller at slide 0 with autoplay stopped.
    pub fn new(slide_count: usize, scheduler: S, interval: Duration) -> Result<Self, CarouselError> {
        if slide_count == 0 {
            return Err(CarouselError::NoSlides);
        }
        if interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        Ok(Self {
            slide_count,
            current: 0,
            interval,
            scheduler,
            timer: None,
            observers: ObserverSet::new(),
        })
    }

    /// Show the current slide and start autoplay.
    pub fn activate(&mut self) {
        self.show(self.current);
        self.start_autoplay();
    }

    /// Stop autoplay for good. The controller can still be navigated.
    pub fn teardown(&mut self) {
        self.stop_autoplay();
        debug!("carousel torn down");
    }

    /// Current slide index.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Autoplay interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether an autoplay timer is outstanding.
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// The outstanding autoplay timer, if any.
    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// Access the scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Advance one slide, wrapping to the first.
    pub fn next(&mut self) -> usize {
        self.show((self.current + 1) % self.slide_count);
        self.current
    }

    /// Go back one slide, wrapping to the last.
    pub fn prev(&mut self) -> usize {
        self.show((self.current + self.slide_count - 1) % self.slide_count);
        self.current
    }

    /// Jump to slide `index`.
    ///
    /// An index outside `[0, slide_count)` is a caller error: the index
    /// is left unchanged and `SlideOutOfRange` is returned.
    pub fn goto_slide(&mut self, index: usize) -> Result<(), CarouselError> {
        self.check_index(index)?;
        self.show(index);
        Ok(())
    }

    /// Start autoplay. Does nothing if it is already running.
    pub fn start_autoplay(&mut self) {
        if self.timer.is_some() {
            return;
        }
        let timer = self.scheduler.schedule_repeating(self.interval);
        trace!(timer = %timer, "autoplay started");
        self.timer = Some(timer);
    }

    /// Stop autoplay. Does nothing if it is not running.
    pub fn stop_autoplay(&mut self) {
        if let Some(timer) = self.timer.take() {
            self.scheduler.cancel(timer);
            trace!(timer = %timer, "autoplay stopped");
        }
    }

    /// Handle a scheduler tick.
    ///
    /// Advances one slide if `timer` is the outstanding autoplay timer.
    /// Returns `false` for stale ticks, which change nothing.
    pub fn on_timer(&mut self, timer: TimerId) -> bool {
        if self.timer != Some(timer) {
            trace!(timer = %timer, "dropping stale autoplay tick");
            return false;
        }
        self.next();
        true
    }

    /// Arrow click or key: next slide.
    pub fn manual_next(&mut self) {
        self.navigate(|c| {
            c.next();
        });
    }

    /// Arrow click or key: previous slide.
    pub fn manual_prev(&mut self) {
        self.navigate(|c| {
            c.prev();
        });
    }

    /// Indicator click.
    ///
    /// The index is validated first, so an invalid one leaves autoplay
    /// untouched.
    pub fn manual_goto(&mut self, index: usize) -> Result<(), CarouselError> {
        self.check_index(index)?;
        self.navigate(|c| c.show(index));
        Ok(())
    }

    /// Keyboard input. Returns `true` if the key moved the carousel.
    pub fn handle_key(&mut self, key: KeyPress) -> bool {
        match key {
            KeyPress::ArrowLeft => self.manual_prev(),
            KeyPress::ArrowRight => self.manual_next(),
            KeyPress::Other => return false,
        }
        true
    }

    /// Completed touch gesture. `None` (below threshold) is ignored and
    /// leaves autoplay running as it was.
    pub fn handle_swipe(&mut self, swipe: Option<SwipeDirection>) -> bool {
        match swipe {
            Some(SwipeDirection::Next) => self.manual_next(),
            Some(SwipeDirection::Prev) => self.manual_prev(),
            None => return false,
        }
        true
    }

    /// Register a slide-changed observer.
    pub fn subscribe(&mut self, observer: impl Observer<SlideChanged> + 'static) -> Subscription {
        self.observers.subscribe(observer)
    }

    /// Remove a slide-changed observer.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.observers.unsubscribe(subscription)
    }

    fn navigate(&mut self, transition: impl FnOnce(&mut Self)) {
        self.stop_autoplay();
        transition(self);
        self.start_autoplay();
    }

    fn check_index(&self, index: usize) -> Result<(), CarouselError> {
        if index >= self.slide_count {
            return Err(CarouselError::SlideOutOfRange {
                index,
                slide_count: self.slide_count,
            });
        }
        Ok(())
    }

    fn show(&mut self, index: usize) {
        self.current = index;
        self.observers.emit(&SlideChanged { index });
    }
}

impl<S: Scheduler> Drop for CarouselController<S> {
    fn drop(&mut self) {
        self.stop_autoplay();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SwipeTracker, VirtualClock};
    use std::cell::RefCell;
    use std::rc::Rc;

    const INTERVAL: Duration = DEFAULT_AUTOPLAY_INTERVAL;

    fn carousel(slides: usize) -> (CarouselController<VirtualClock>, VirtualClock) {
        let clock = VirtualClock::new();
        let controller = CarouselController::new(slides, clock.clone(), INTERVAL).unwrap();
        (controller, clock)
    }

    /// Deliver every tick up to `by` from now, one at a time.
    fn run_for(controller: &mut CarouselController<VirtualClock>, clock: &VirtualClock, by: Duration) {
        let deadline = clock.now() + by;
        while let Some(timer) = clock.next_tick(deadline) {
            controller.on_timer(timer);
        }
    }

    #[test]
    fn test_rejects_invalid_construction() {
        let clock = VirtualClock::new();
        assert!(matches!(
            CarouselController::new(0, clock.clone(), INTERVAL),
            Err(CarouselError::NoSlides)
        ));
        assert!(matches!(
            CarouselController::new(3, clock, Duration::ZERO),
            Err(CarouselError::ZeroInterval)
        ));
    }

    #[test]
    fn test_wraps_in_both_directions() {
        let (mut c, _) = carousel(6);
        assert_eq!(c.prev(), 5);
        assert_eq!(c.next(), 0);
    }

    #[test]
    fn test_next_n_times_is_identity() {
        for start in 0..6 {
            let (mut c, _) = carousel(6);
            c.goto_slide(start).unwrap();
            for _ in 0..6 {
                c.next();
            }
            assert_eq!(c.current_index(), start);

            c.next();
            c.prev();
            assert_eq!(c.current_index(), start);
        }
    }

    #[test]
    fn test_goto_out_of_range_changes_nothing() {
        let (mut c, clock) = carousel(4);
        c.activate();
        c.goto_slide(2).unwrap();
        let timer = c.timer();

        assert_eq!(
            c.manual_goto(4),
            Err(CarouselError::SlideOutOfRange {
                index: 4,
                slide_count: 4
            })
        );
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.timer(), timer);
        assert_eq!(clock.active_timers(), 1);
    }

    #[test]
    fn test_autoplay_advances_each_interval() {
        let (mut c, clock) = carousel(6);
        c.activate();
        assert!(c.is_running());

        run_for(&mut c, &clock, INTERVAL - Duration::from_millis(1));
        assert_eq!(c.current_index(), 0);
        run_for(&mut c, &clock, Duration::from_millis(1));
        assert_eq!(c.current_index(), 1);
        run_for(&mut c, &clock, 3 * INTERVAL);
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn test_start_twice_keeps_one_timer() {
        let (mut c, clock) = carousel(6);
        c.start_autoplay();
        c.start_autoplay();
        assert_eq!(clock.active_timers(), 1);

        run_for(&mut c, &clock, 2 * INTERVAL);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_stop_twice_is_harmless() {
        let (mut c, clock) = carousel(6);
        c.start_autoplay();
        c.stop_autoplay();
        c.stop_autoplay();

        assert!(!c.is_running());
        assert_eq!(clock.active_timers(), 0);
        run_for(&mut c, &clock, 10 * INTERVAL);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_manual_navigation_resets_countdown() {
        let (mut c, clock) = carousel(6);
        c.activate();

        run_for(&mut c, &clock, Duration::from_millis(4000));
        c.manual_next();
        assert_eq!(c.current_index(), 1);
        assert_eq!(clock.active_timers(), 1);

        // The old timer would have fired at 5000ms.
        run_for(&mut c, &clock, Duration::from_millis(4999));
        assert_eq!(c.current_index(), 1);
        run_for(&mut c, &clock, Duration::from_millis(1));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_stale_tick_cannot_double_advance() {
        let (mut c, clock) = carousel(6);
        c.activate();
        let old = c.timer().unwrap();

        // Tick and manual click land in the same turn.
        let due = clock.advance(INTERVAL);
        assert_eq!(due, vec![old]);
        c.manual_next();
        for timer in due {
            assert!(!c.on_timer(timer));
        }

        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_swipe_and_keys() {
        let (mut c, _) = carousel(6);
        c.activate();
        let mut swipe = SwipeTracker::default();

        swipe.begin(300.0);
        assert!(c.handle_swipe(swipe.end(240.0)));
        assert_eq!(c.current_index(), 1);

        swipe.begin(300.0);
        let timer = c.timer();
        assert!(!c.handle_swipe(swipe.end(280.0)));
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.timer(), timer);

        assert!(c.handle_key(KeyPress::ArrowLeft));
        assert!(c.handle_key(KeyPress::ArrowLeft));
        assert_eq!(c.current_index(), 5);
        assert!(!c.handle_key(KeyPress::Other));
        assert!(c.handle_key(KeyPress::ArrowRight));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_observers_see_slide_changes() {
        let (mut c, _) = carousel(3);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        c.subscribe(move |e: &SlideChanged| sink.borrow_mut().push(e.index));

        c.activate();
        c.manual_prev();
        c.manual_goto(1).unwrap();
        let _ = c.manual_goto(7);

        assert_eq!(*seen.borrow(), vec![0, 2, 1]);
    }

    #[test]
    fn test_teardown_and_drop_cancel_timer() {
        let (mut c, clock) = carousel(2);
        c.activate();
        c.teardown();
        assert_eq!(clock.active_timers(), 0);

        c.activate();
        assert_eq!(clock.active_timers(), 1);
        drop(c);
        assert_eq!(clock.active_timers(), 0);
    }
}
