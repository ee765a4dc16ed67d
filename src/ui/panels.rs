//! Inventory UI panels
//!
//! Panel state is mutated by inventory subscriptions and read by the
//! renderer. `HuePanel` mirrors the order-preserving inventory one item at
//! a time; `TierPanel` mirrors the tier-sorted snapshot wholesale.

use crate::inventory::{InventoryError, ItemAdded};
use crate::items::{CollectibleId, Hue, Kind, Tier};

/// Fixed row of on/off slots that fills up with collectibles of one hue
#[derive(Debug, Clone)]
pub struct HuePanel {
    hue: Hue,
    slots: Vec<bool>,
}

impl HuePanel {
    pub fn new(hue: Hue, slot_count: usize) -> Self {
        Self {
            hue,
            slots: vec![false; slot_count],
        }
    }

    pub fn hue(&self) -> Hue {
        self.hue
    }

    pub fn slots(&self) -> &[bool] {
        &self.slots
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| **slot).count()
    }

    /// Handle an addition: activate the first inactive slot when the item
    /// matches this panel's hue
    ///
    /// Additions beyond the last slot are silently ignored; the panel is a
    /// bounded display, not a second inventory.
    pub fn on_item_added(&mut self, event: &ItemAdded) {
        if event.kind != Kind::Hued(self.hue) {
            return;
        }
        if let Some(slot) = self.slots.iter_mut().find(|slot| !**slot) {
            *slot = true;
        }
    }
}

/// Fixed row of colored slots mirroring the tier-sorted snapshot
///
/// Slot `i` always shows snapshot entry `i`, so the scene must never hold
/// more tiered collectibles than the panel has slots.
#[derive(Debug, Clone)]
pub struct TierPanel {
    slots: Vec<Option<Tier>>,
    /// Display colors indexed by `Tier::rank()`
    colors: [(u8, u8, u8); 3],
}

impl TierPanel {
    pub fn new(slot_count: usize, colors: [(u8, u8, u8); 3]) -> Self {
        Self {
            slots: vec![None; slot_count],
            colors,
        }
    }

    pub fn slots(&self) -> &[Option<Tier>] {
        &self.slots
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn color_for(&self, tier: Tier) -> (u8, u8, u8) {
        self.colors[tier.rank() as usize]
    }

    /// Mirror `snapshot`: slot `i` takes the tier of entry `i`
    ///
    /// Rejected wholesale (slots untouched) when the snapshot outgrows the
    /// panel.
    pub fn on_snapshot(
        &mut self,
        snapshot: &[(Tier, CollectibleId)],
    ) -> Result<(), InventoryError> {
        if snapshot.len() > self.slots.len() {
            return Err(InventoryError::SlotOverflow {
                entries: snapshot.len(),
                slots: self.slots.len(),
            });
        }
        for (slot, (tier, _)) in self.slots.iter_mut().zip(snapshot) {
            *slot = Some(*tier);
        }
        Ok(())
    }
}
