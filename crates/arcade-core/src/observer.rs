//! Change notification for view collaborators.

use std::fmt;

/// Receives notifications of type `E`.
///
/// Any `Fn(&E)` closure is an observer, so views can register plain
/// callbacks.
pub trait Observer<E> {
    /// Called once per emitted event.
    fn notify(&self, event: &E);
}

impl<E, F> Observer<E> for F
where
    F: Fn(&E),
{
    fn notify(&self, event: &E) {
        self(event)
    }
}

/// Handle identifying one registration in an [`ObserverSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Ordered set of observers for one event type.
///
/// Observers are notified in registration order.
pub struct ObserverSet<E> {
    next_id: u64,
    observers: Vec<(Subscription, Box<dyn Observer<E>>)>,
}

impl<E> ObserverSet<E> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            observers: Vec::new(),
        }
    }

    /// Register an observer.
    pub fn subscribe(&mut self, observer: impl Observer<E> + 'static) -> Subscription {
        let subscription = Subscription(self.next_id);
        self.next_id += 1;
        self.observers.push((subscription, Box::new(observer)));
        subscription
    }

    /// Remove a registration. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let len_before = self.observers.len();
        self.observers.retain(|(s, _)| *s != subscription);
        self.observers.len() < len_before
    }

    /// Deliver an event to every observer.
    pub fn emit(&self, event: &E) {
        for (_, observer) in &self.observers {
            observer.notify(event);
        }
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check if no observer is registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<E> Default for ObserverSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ObserverSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverSet")
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut set = ObserverSet::new();

        let first = Rc::clone(&seen);
        set.subscribe(move |e: &u32| first.borrow_mut().push(("first", *e)));
        let second = Rc::clone(&seen);
        set.subscribe(move |e: &u32| second.borrow_mut().push(("second", *e)));

        set.emit(&7);
        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut set = ObserverSet::new();
        let counter = Rc::clone(&count);
        let sub = set.subscribe(move |_: &()| *counter.borrow_mut() += 1);

        set.emit(&());
        assert!(set.unsubscribe(sub));
        assert!(!set.unsubscribe(sub));
        set.emit(&());

        assert_eq!(*count.borrow(), 1);
        assert!(set.is_empty());
    }
}
