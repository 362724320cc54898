mod display_event_handler;
mod modifier_handler;
mod mouse_combo_handler;
mod window_move_handler;
mod window_resize_handler;

use super::config::Config;
use super::display_servers::DisplayServer;
use super::models::{Geometry, Handle, Mode, Point, ResizeSection};
use super::state::State;
use super::utils::modmask_lookup::ModMask;
use super::{DisplayAction, DisplayEvent, Verdict};

pub use window_resize_handler::resize_geometry;
