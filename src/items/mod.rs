//! Collectible items

pub mod collectible;

pub use collectible::{Collectible, CollectibleId, Hue, Kind, Tier};
