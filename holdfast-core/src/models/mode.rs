use std::fmt::Debug;

use super::window::Handle;
use super::{Geometry, Point, ResizeSection, WindowHandle};

/// Where the current gesture stands.
///
/// Exactly one variant is active. A drag variant carries everything it needs to turn the
/// next pointer position into geometry: the window, the geometry read when this drag
/// segment began and the pointer position at that moment.
#[derive(Clone, Debug, PartialEq)]
pub enum Mode<H: Handle> {
    /// The arming key is up.
    Idle,
    /// The arming key is down, no button yet.
    Armed,
    MovingWindow {
        window: WindowHandle<H>,
        anchor: Geometry,
        pointer: Point,
    },
    ResizingWindow {
        window: WindowHandle<H>,
        anchor: Geometry,
        pointer: Point,
        section: ResizeSection,
    },
}

impl<H: Handle> Default for Mode<H> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<H: Handle> Mode<H> {
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::MovingWindow { .. } | Self::ResizingWindow { .. })
    }

    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn window(&self) -> Option<&WindowHandle<H>> {
        match self {
            Self::MovingWindow { window, .. } | Self::ResizingWindow { window, .. } => Some(window),
            Self::Idle | Self::Armed => None,
        }
    }

    /// Short name for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Armed => "armed",
            Self::MovingWindow { .. } => "moving",
            Self::ResizingWindow { .. } => "resizing",
        }
    }
}
