use crate::models::Handle;
use crate::models::Point;
use crate::models::Size;
use crate::models::WindowHandle;

/// These are responses from the gesture core.
/// The display server should act on these actions.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayAction<H: Handle> {
    /// Bring a window, and the application owning it, to the front.
    MoveToTop(WindowHandle<H>),

    /// Move a window's top left corner to a point.
    SetPosition(WindowHandle<H>, Point),

    /// Resize a window.
    SetSize(WindowHandle<H>, Size),
}

impl<H: Handle> DisplayAction<H> {
    pub const fn window(&self) -> &WindowHandle<H> {
        match self {
            Self::MoveToTop(h) | Self::SetPosition(h, _) | Self::SetSize(h, _) => h,
        }
    }

    /// Whether this action changes window geometry.
    pub const fn is_geometry_write(&self) -> bool {
        matches!(self, Self::SetPosition(..) | Self::SetSize(..))
    }
}
