//! Inventory system
//!
//! Two collection strategies behind one context: an order-preserving
//! inventory and a tier-sorted inventory, each notifying its subscribers
//! synchronously on every addition.

pub mod context;
pub mod error;
pub mod events;
pub mod ordered;
pub mod tiered;

pub use context::{ActiveInventory, InventoryContext};
pub use error::InventoryError;
pub use events::{SubscriberId, Subscribers};
pub use ordered::{ItemAdded, OrderedInventory};
pub use tiered::{tier_ordering, TieredInventory};
