//! Custom ratatui widgets

pub mod slot_row;

pub use slot_row::{rgb, HuePanelWidget, TierPanelWidget};
