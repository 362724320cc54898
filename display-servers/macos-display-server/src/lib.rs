//! macOS backend for holdfast.
//!
//! Windows are reached through the accessibility API, hit-testing goes through the
//! on-screen window list and input arrives through a session-wide `CGEventTap`.
#![cfg(target_os = "macos")]
// allow casting types
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

mod axwrap;
mod error;
mod event_tap;
mod event_translate;
pub mod permission;

pub use axwrap::{AXUIElement, AXWrap};
pub use error::{Error, Result};
pub use event_tap::EventTap;

use holdfast_core::models::{Geometry, Handle, Point, WindowHandle};
use holdfast_core::{DisplayAction, DisplayServer, HoldfastError};

/// A window of another application, as an accessibility element.
#[derive(Debug, Clone, PartialEq)]
pub struct MacosWindowHandle(pub AXUIElement);
impl Handle for MacosWindowHandle {}

pub struct MacosDisplayServer {
    ax: AXWrap,
}

impl MacosDisplayServer {
    pub fn new() -> Self {
        Self { ax: AXWrap::new() }
    }
}

impl Default for MacosDisplayServer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayServer<MacosWindowHandle> for MacosDisplayServer {
    fn window_at(&self, point: Point) -> Option<(WindowHandle<MacosWindowHandle>, Geometry)> {
        let (element, geometry) = self.ax.get_window_at(point)?;
        Some((WindowHandle(MacosWindowHandle(element)), geometry))
    }

    fn geometry(&self, handle: &WindowHandle<MacosWindowHandle>) -> Option<Geometry> {
        self.ax.get_geometry(&handle.0 .0).ok()
    }

    fn execute_action(
        &mut self,
        act: DisplayAction<MacosWindowHandle>,
    ) -> holdfast_core::Result<()> {
        let xw = &self.ax;
        let result = match act {
            DisplayAction::MoveToTop(h) => from_move_to_top(xw, &h),
            DisplayAction::SetPosition(h, p) => xw.set_position(&h.0 .0, p),
            DisplayAction::SetSize(h, s) => xw.set_size(&h.0 .0, s),
        };
        result.map_err(HoldfastError::from)
    }
}

// Display actions.
fn from_move_to_top(ax: &AXWrap, handle: &WindowHandle<MacosWindowHandle>) -> Result<()> {
    // Raising is best effort, the drag goes on either way.
    if let Err(err) = ax.raise(&handle.0 .0) {
        tracing::debug!("Unable to raise {:?}: {}", handle, err);
    }
    if let Err(err) = ax.activate_owner(&handle.0 .0) {
        tracing::debug!("Unable to bring owner of {:?} forward: {}", handle, err);
    }
    Ok(())
}
