//! Inventory error types

use thiserror::Error;

use crate::items::CollectibleId;

/// Errors that can occur during inventory operations
///
/// All of these abort the triggering operation with state unchanged; in a
/// correctly configured scene none of them occur at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// No inventory has been registered in the context yet
    #[error("no inventory has been registered")]
    NotInitialized,

    /// The tier-sorted inventory received a collectible without a tier
    #[error("collectible {id} has no tier attribute")]
    MissingTier { id: CollectibleId },

    /// A tier panel received more entries than it has slots
    #[error("snapshot has {entries} entries but the panel has {slots} slots")]
    SlotOverflow { entries: usize, slots: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            InventoryError::NotInitialized.to_string(),
            "no inventory has been registered"
        );
        assert_eq!(
            InventoryError::MissingTier { id: 7 }.to_string(),
            "collectible 7 has no tier attribute"
        );
    }
}
