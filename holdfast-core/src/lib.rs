//! Modifier-drag window moving and resizing.
//!
//! The core turns a normalized stream of input events into gestures. Every event gets a
//! [`Verdict`] back, telling the event source whether to swallow it or let it reach the
//! application under the pointer. Geometry changes are queued as [`DisplayAction`]s and
//! executed against a [`DisplayServer`] by the [`Manager`].
// We deny clippy pedantic lints, primarily to keep code as correct as possible.
// Everything here runs inside a system-wide input callback, so a panic or a stall
// freezes the pointer for the whole session.
#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
pub mod config;
mod display_action;
mod display_event;
pub mod display_servers;
pub mod errors;
mod handlers;
pub mod models;
pub mod state;
pub mod utils;

pub use config::Config;
pub use display_action::DisplayAction;
pub use display_event::{DisplayEvent, Verdict};
pub use display_servers::DisplayServer;
pub use errors::{HoldfastError, Result};
pub use handlers::resize_geometry;
pub use models::Manager;
pub use models::Mode;
pub use state::State;
pub use utils::modmask_lookup::{ModMask, ModifierKey};
