//! Holdfast: move and resize any window by holding a modifier key and dragging.
mod config;
pub mod utils;

pub use config::*;
