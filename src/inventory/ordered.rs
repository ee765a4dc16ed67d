//! Order-preserving inventory
//!
//! Appends collected items in pickup order and notifies subscribers with
//! the item that was just added.

use crate::items::{Collectible, CollectibleId, Kind};

use super::events::{SubscriberId, Subscribers};

/// Event payload: the item that was just appended
#[derive(Debug, Clone, PartialEq)]
pub struct ItemAdded {
    pub id: CollectibleId,
    pub name: String,
    pub kind: Kind,
}

/// Inventory that preserves insertion order
///
/// Additions never fail; duplicates are kept and there is no capacity
/// bound.
#[derive(Debug, Default)]
pub struct OrderedInventory {
    items: Vec<CollectibleId>,
    subscribers: Subscribers<ItemAdded>,
}

impl OrderedInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` and notify subscribers with its snapshot
    pub fn add(&mut self, item: &Collectible) {
        self.items.push(item.id);
        let event = ItemAdded {
            id: item.id,
            name: item.name.clone(),
            kind: item.kind,
        };
        self.subscribers.dispatch(&event);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Collected handles in pickup order
    pub fn items(&self) -> &[CollectibleId] {
        &self.items
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriberId
    where
        F: FnMut(&ItemAdded) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{Hue, Tier};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn cube(id: CollectibleId, hue: Hue) -> Collectible {
        Collectible::new(id, format!("{} Cube", hue.name()), Kind::Hued(hue))
    }

    #[test]
    fn test_preserves_pickup_order() {
        let mut inventory = OrderedInventory::new();
        inventory.add(&cube(3, Hue::Red));
        inventory.add(&cube(1, Hue::Blue));
        inventory.add(&cube(2, Hue::Red));

        assert_eq!(inventory.len(), 3);
        assert_eq!(inventory.items(), &[3, 1, 2]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut inventory = OrderedInventory::new();
        let item = cube(5, Hue::Blue);
        inventory.add(&item);
        inventory.add(&item);

        assert_eq!(inventory.items(), &[5, 5]);
    }

    #[test]
    fn test_event_carries_only_the_new_item() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut inventory = OrderedInventory::new();
        {
            let seen = Rc::clone(&seen);
            inventory.subscribe(move |event: &ItemAdded| {
                seen.borrow_mut().push(event.clone());
            });
        }

        inventory.add(&cube(1, Hue::Red));
        inventory.add(&Collectible::new(2, "T1 Orb", Kind::Tiered(Tier::T1)));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].id, 1);
        assert_eq!(seen[0].kind, Kind::Hued(Hue::Red));
        assert_eq!(seen[1].id, 2);
        assert_eq!(seen[1].kind, Kind::Tiered(Tier::T1));
    }

    #[test]
    fn test_unsubscribed_listener_is_silent() {
        let count = Rc::new(RefCell::new(0));
        let mut inventory = OrderedInventory::new();
        let id = {
            let count = Rc::clone(&count);
            inventory.subscribe(move |_: &ItemAdded| *count.borrow_mut() += 1)
        };

        inventory.add(&cube(1, Hue::Red));
        assert!(inventory.unsubscribe(id));
        inventory.add(&cube(2, Hue::Red));

        assert_eq!(*count.borrow(), 1);
    }
}
