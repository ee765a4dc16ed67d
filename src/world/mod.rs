//! World module

pub mod map;

pub use map::{Chamber, CHAMBER_HEIGHT, CHAMBER_WIDTH};
