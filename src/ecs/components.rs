//! ECS Components
//!
//! Components carried by collectible entities in the chamber.

use serde::{Deserialize, Serialize};

/// Position in the chamber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Visual representation of an entity
///
/// Removed when the entity is collected; a consumed collectible leaves no
/// visual behind.
#[derive(Debug, Clone)]
pub struct Renderable {
    /// Character to display
    pub glyph: char,
    /// Foreground color (RGB)
    pub fg: (u8, u8, u8),
}

impl Renderable {
    pub fn new(glyph: char, fg: (u8, u8, u8)) -> Self {
        Self { glyph, fg }
    }
}

/// Marks an entity as responding to interaction
///
/// Removed on collection, so a consumed collectible ignores further
/// clicks rather than just hiding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Interactable;
