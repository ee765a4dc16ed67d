//! Inventory event dispatch
//!
//! Each inventory owns an explicit subscriber list. Dispatch is synchronous
//! and runs in subscription order; unsubscribing removes the callback for
//! every later dispatch.

use std::fmt;

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Subscriber list for events of type `E`
pub struct Subscribers<E: ?Sized> {
    next_id: u64,
    entries: Vec<(SubscriberId, Box<dyn FnMut(&E)>)>,
}

impl<E: ?Sized> Subscribers<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Register a callback; returns a handle for `unsubscribe`
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriberId
    where
        F: FnMut(&E) + 'static,
    {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Remove a previously registered callback
    ///
    /// Returns false when the handle is unknown (already unsubscribed).
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invoke every callback with `event`, in subscription order
    pub fn dispatch(&mut self, event: &E) {
        for (_, callback) in self.entries.iter_mut() {
            callback(event);
        }
    }
}

impl<E: ?Sized> Default for Subscribers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ?Sized> fmt::Debug for Subscribers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers: Subscribers<u32> = Subscribers::new();

        for tag in ["first", "second", "third"] {
            let seen = Rc::clone(&seen);
            subscribers.subscribe(move |value: &u32| {
                seen.borrow_mut().push((tag, *value));
            });
        }

        subscribers.dispatch(&9);
        assert_eq!(
            *seen.borrow(),
            vec![("first", 9), ("second", 9), ("third", 9)]
        );
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers: Subscribers<u32> = Subscribers::new();

        let keeper = {
            let seen = Rc::clone(&seen);
            subscribers.subscribe(move |value: &u32| seen.borrow_mut().push(("kept", *value)))
        };
        let dropped = {
            let seen = Rc::clone(&seen);
            subscribers.subscribe(move |value: &u32| seen.borrow_mut().push(("gone", *value)))
        };

        assert!(subscribers.unsubscribe(dropped));
        assert!(!subscribers.unsubscribe(dropped));
        subscribers.dispatch(&1);

        assert_eq!(*seen.borrow(), vec![("kept", 1)]);
        assert_ne!(keeper, dropped);
    }

    #[test]
    fn test_empty_dispatch_is_noop() {
        let mut subscribers: Subscribers<u32> = Subscribers::new();
        assert!(subscribers.is_empty());
        subscribers.dispatch(&0);
    }
}
