//! Game module - scene state and interaction flow

mod state;

pub use state::{Game, GameMessage, GameState, MessageCategory, SceneKind};
