//! Entity Component System module
//!
//! Components and systems for the chamber scene.

pub mod components;
pub mod systems;

pub use components::*;
pub use systems::{collect, interactable_at};
