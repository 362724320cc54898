#[cfg(test)]
mod mock_display_server;

use crate::display_action::DisplayAction;
use crate::models::{Geometry, Handle, Point, WindowHandle};
use crate::Result;

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// Queries and commands against the windows of other applications.
///
/// Every call is best effort and must return promptly: it runs inside the input callback.
pub trait DisplayServer<H: Handle> {
    /// The topmost regular window under `point` and its geometry.
    ///
    /// Windows owned by this process and surfaces outside the normal window layer (menu
    /// bar, dock) are skipped.
    fn window_at(&self, point: Point) -> Option<(WindowHandle<H>, Geometry)>;

    /// Fresh geometry for a window, `None` once the handle went stale.
    fn geometry(&self, handle: &WindowHandle<H>) -> Option<Geometry>;

    /// # Errors
    ///
    /// Will error with [`crate::HoldfastError::WindowLost`] if the handle went stale.
    fn execute_action(&mut self, act: DisplayAction<H>) -> Result<()>;
}
