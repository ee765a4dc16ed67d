//! Reliquary - a terminal collectible-inventory demo
//!
//! Click the relics in the chamber and watch them land in one of two
//! inventories: order-preserving or tier-sorted.

pub mod data;
pub mod ecs;
pub mod game;
pub mod inventory;
pub mod items;
pub mod ui;
pub mod world;

// Re-export commonly used types
pub use game::{Game, GameState};
pub use inventory::{ActiveInventory, InventoryContext, InventoryError};
pub use items::{Collectible, CollectibleId};
