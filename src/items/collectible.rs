//! Collectible definitions
//!
//! The two collectible families and the handle type inventories track.

use serde::{Deserialize, Serialize};

/// Unique collectible ID for tracking
pub type CollectibleId = u64;

/// Hue of a cube collectible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hue {
    Red,
    Blue,
}

impl Hue {
    /// Get display color RGB
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Hue::Red => (220, 80, 80),
            Hue::Blue => (90, 140, 255),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Hue::Red => "Red",
            Hue::Blue => "Blue",
        }
    }
}

/// Tier of an orb collectible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    T1,
    T2,
    T3,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::T1, Tier::T2, Tier::T3];

    /// Numeric value for sorting (higher = better)
    pub fn rank(&self) -> u8 {
        match self {
            Tier::T1 => 0,
            Tier::T2 => 1,
            Tier::T3 => 2,
        }
    }

    /// Get display color RGB
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Tier::T1 => (200, 200, 200),
            Tier::T2 => (100, 150, 255),
            Tier::T3 => (255, 180, 50),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tier::T1 => "T1",
            Tier::T2 => "T2",
            Tier::T3 => "T3",
        }
    }
}

/// Which family a collectible belongs to: hued cubes or tiered orbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Hued(Hue),
    Tiered(Tier),
}

impl Kind {
    pub fn hue(&self) -> Option<Hue> {
        match self {
            Kind::Hued(hue) => Some(*hue),
            Kind::Tiered(_) => None,
        }
    }

    pub fn tier(&self) -> Option<Tier> {
        match self {
            Kind::Hued(_) => None,
            Kind::Tiered(tier) => Some(*tier),
        }
    }

    /// Scene glyph for this family
    pub fn glyph(&self) -> char {
        match self {
            Kind::Hued(_) => '■',
            Kind::Tiered(_) => '●',
        }
    }

    /// Scene display color RGB
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Kind::Hued(hue) => hue.color(),
            Kind::Tiered(tier) => tier.color(),
        }
    }
}

/// A pickable scene object.
///
/// Inventories only ever hold the `id` handle; the object itself stays on
/// its scene entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub id: CollectibleId,
    pub name: String,
    pub kind: Kind,
}

impl Collectible {
    pub fn new(id: CollectibleId, name: impl Into<String>, kind: Kind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }

    pub fn hue(&self) -> Option<Hue> {
        self.kind.hue()
    }

    pub fn tier(&self) -> Option<Tier> {
        self.kind.tier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ranks_ascend() {
        assert!(Tier::T1.rank() < Tier::T2.rank());
        assert!(Tier::T2.rank() < Tier::T3.rank());
    }

    #[test]
    fn test_kind_accessors() {
        let cube = Collectible::new(1, "Red Cube", Kind::Hued(Hue::Red));
        assert_eq!(cube.hue(), Some(Hue::Red));
        assert_eq!(cube.tier(), None);

        let orb = Collectible::new(2, "T3 Orb", Kind::Tiered(Tier::T3));
        assert_eq!(orb.hue(), None);
        assert_eq!(orb.tier(), Some(Tier::T3));
    }
}
