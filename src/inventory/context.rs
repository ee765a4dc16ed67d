//! Active inventory context
//!
//! Holds the single inventory a scene collects into. Registration is
//! first-wins: a later registration is dropped. The context is owned by
//! the game and passed explicitly to the systems that need it.

use crate::items::Collectible;

use super::error::InventoryError;
use super::ordered::OrderedInventory;
use super::tiered::TieredInventory;

/// The two inventory strategies a scene can run
#[derive(Debug)]
pub enum ActiveInventory {
    Ordered(OrderedInventory),
    Tiered(TieredInventory),
}

impl ActiveInventory {
    /// Add a collectible using whichever strategy is active
    pub fn add(&mut self, item: &Collectible) -> Result<(), InventoryError> {
        match self {
            ActiveInventory::Ordered(inventory) => {
                inventory.add(item);
                Ok(())
            }
            ActiveInventory::Tiered(inventory) => inventory.add(item),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ActiveInventory::Ordered(inventory) => inventory.len(),
            ActiveInventory::Tiered(inventory) => inventory.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Context holding the active inventory for one run
///
/// Set once, never reassigned; there is no teardown path.
#[derive(Debug, Default)]
pub struct InventoryContext {
    active: Option<ActiveInventory>,
}

impl InventoryContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `inventory` if no inventory is active yet
    ///
    /// Returns true when the registration won; a losing registration is
    /// dropped.
    pub fn register(&mut self, inventory: ActiveInventory) -> bool {
        if self.active.is_some() {
            log::warn!("inventory already registered, dropping duplicate");
            return false;
        }
        self.active = Some(inventory);
        true
    }

    pub fn is_registered(&self) -> bool {
        self.active.is_some()
    }

    /// The active inventory, or `NotInitialized` before registration
    pub fn current(&self) -> Result<&ActiveInventory, InventoryError> {
        self.active.as_ref().ok_or(InventoryError::NotInitialized)
    }

    pub fn current_mut(&mut self) -> Result<&mut ActiveInventory, InventoryError> {
        self.active.as_mut().ok_or(InventoryError::NotInitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{Hue, Kind};

    #[test]
    fn test_current_before_registration_fails() {
        let context = InventoryContext::new();
        assert_eq!(
            context.current().unwrap_err(),
            InventoryError::NotInitialized
        );
    }

    #[test]
    fn test_first_registration_wins() {
        let mut context = InventoryContext::new();

        let mut first = OrderedInventory::new();
        first.add(&Collectible::new(1, "Red Cube", Kind::Hued(Hue::Red)));
        assert!(context.register(ActiveInventory::Ordered(first)));

        // The duplicate is dropped; the first registration keeps its contents.
        assert!(!context.register(ActiveInventory::Tiered(TieredInventory::new())));

        let current = context.current().unwrap();
        assert!(matches!(current, ActiveInventory::Ordered(_)));
        assert_eq!(current.len(), 1);
    }

    #[test]
    fn test_add_routes_to_active_strategy() {
        let mut context = InventoryContext::new();
        context.register(ActiveInventory::Tiered(TieredInventory::new()));

        let cube = Collectible::new(4, "Blue Cube", Kind::Hued(Hue::Blue));
        let err = context.current_mut().unwrap().add(&cube).unwrap_err();
        assert_eq!(err, InventoryError::MissingTier { id: 4 });
        assert!(context.current().unwrap().is_empty());
    }
}
