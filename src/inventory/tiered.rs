//! Tier-sorted inventory
//!
//! Keeps collected items sorted by tier, highest tier first, and notifies
//! subscribers with the full sorted snapshot after every addition.

use std::cmp::Ordering;

use crate::items::{Collectible, CollectibleId, Tier};

use super::error::InventoryError;
use super::events::{SubscriberId, Subscribers};

/// Ordering used by the sorted list: natural tier order, negated.
///
/// Never returns `Equal`: a tie is reported as `Greater`. Combined with
/// the insertion rule below, equal tiers always become distinct entries,
/// the newest entry placed first within its tier.
pub fn tier_ordering(a: Tier, b: Tier) -> Ordering {
    match b.rank().cmp(&a.rank()) {
        Ordering::Equal => Ordering::Greater,
        ord => ord,
    }
}

/// Inventory that keeps items sorted by tier (T3 before T2 before T1)
#[derive(Debug, Default)]
pub struct TieredInventory {
    items: Vec<(Tier, CollectibleId)>,
    subscribers: Subscribers<[(Tier, CollectibleId)]>,
}

impl TieredInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `item` by tier, then notify subscribers with the snapshot
    ///
    /// Fails with `MissingTier` when the item carries no tier attribute;
    /// nothing is stored and no event is dispatched in that case.
    ///
    /// The insertion point is the first entry whose tier compares
    /// `Greater` against the new one, so an item lands before
    /// already-collected items of the same tier.
    pub fn add(&mut self, item: &Collectible) -> Result<(), InventoryError> {
        let tier = item
            .tier()
            .ok_or(InventoryError::MissingTier { id: item.id })?;
        let at = self
            .items
            .partition_point(|(existing, _)| tier_ordering(*existing, tier) == Ordering::Less);
        self.items.insert(at, (tier, item.id));
        self.subscribers.dispatch(&self.items);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current (tier, handle) entries, highest tier first
    pub fn items(&self) -> &[(Tier, CollectibleId)] {
        &self.items
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriberId
    where
        F: FnMut(&[(Tier, CollectibleId)]) + 'static,
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
    use crate::items::{Hue, Kind};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn orb(id: CollectibleId, tier: Tier) -> Collectible {
        Collectible::new(id, format!("{} Orb", tier.name()), Kind::Tiered(tier))
    }

    #[test]
    fn test_ordering_never_reports_equal() {
        for tier in Tier::ALL {
            assert_ne!(tier_ordering(tier, tier), Ordering::Equal);
        }
    }

    #[test]
    fn test_tie_break_is_not_antisymmetric() {
        // compare(a, b) == -compare(b, a) fails on a forced tie: both
        // directions report Greater.
        let forward = tier_ordering(Tier::T2, Tier::T2);
        let reverse = tier_ordering(Tier::T2, Tier::T2);
        assert_eq!(forward, Ordering::Greater);
        assert_ne!(forward, reverse.reverse());
        // Distinct tiers still invert cleanly.
        assert_eq!(
            tier_ordering(Tier::T1, Tier::T3).reverse(),
            tier_ordering(Tier::T3, Tier::T1)
        );
    }

    #[test]
    fn test_sorts_descending_by_tier() {
        let mut inventory = TieredInventory::new();
        inventory.add(&orb(1, Tier::T2)).unwrap();
        inventory.add(&orb(2, Tier::T1)).unwrap();
        inventory.add(&orb(3, Tier::T3)).unwrap();

        let tiers: Vec<Tier> = inventory.items().iter().map(|(t, _)| *t).collect();
        assert_eq!(tiers, vec![Tier::T3, Tier::T2, Tier::T1]);
    }

    #[test]
    fn test_duplicate_tiers_coexist_newest_first() {
        let mut inventory = TieredInventory::new();
        inventory.add(&orb(1, Tier::T2)).unwrap();
        inventory.add(&orb(2, Tier::T2)).unwrap();

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.items(), &[(Tier::T2, 2), (Tier::T2, 1)]);
    }

    #[test]
    fn test_missing_tier_leaves_state_unchanged() {
        let notified = Rc::new(RefCell::new(0));
        let mut inventory = TieredInventory::new();
        {
            let notified = Rc::clone(&notified);
            inventory.subscribe(move |_: &[(Tier, CollectibleId)]| {
                *notified.borrow_mut() += 1;
            });
        }
        inventory.add(&orb(1, Tier::T1)).unwrap();

        let cube = Collectible::new(9, "Red Cube", Kind::Hued(Hue::Red));
        let err = inventory.add(&cube).unwrap_err();

        assert_eq!(err, InventoryError::MissingTier { id: 9 });
        assert_eq!(inventory.items(), &[(Tier::T1, 1)]);
        assert_eq!(*notified.borrow(), 1);
    }

    #[test]
    fn test_snapshot_event_carries_full_ordering() {
        let snapshots = Rc::new(RefCell::new(Vec::new()));
        let mut inventory = TieredInventory::new();
        {
            let snapshots = Rc::clone(&snapshots);
            inventory.subscribe(move |snapshot: &[(Tier, CollectibleId)]| {
                snapshots.borrow_mut().push(snapshot.to_vec());
            });
        }

        inventory.add(&orb(1, Tier::T1)).unwrap();
        inventory.add(&orb(2, Tier::T3)).unwrap();

        let snapshots = snapshots.borrow();
        assert_eq!(snapshots[0], vec![(Tier::T1, 1)]);
        assert_eq!(snapshots[1], vec![(Tier::T3, 2), (Tier::T1, 1)]);
    }
}
