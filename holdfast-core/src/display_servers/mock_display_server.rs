use super::DisplayServer;
use crate::display_action::DisplayAction;
use crate::models::{Geometry, MockHandle, Point, WindowHandle};
use crate::{HoldfastError, Result};

/// Keeps a stack of fake windows, front first, and records every action it executes.
#[derive(Clone, Debug, Default)]
pub struct MockDisplayServer {
    pub windows: Vec<(WindowHandle<MockHandle>, Geometry)>,
    pub actions: Vec<DisplayAction<MockHandle>>,
    /// Handles whose geometry can still be read but whose writes fail.
    pub read_only: Vec<WindowHandle<MockHandle>>,
    /// Handles that report themselves lost when raised.
    pub unraisable: Vec<WindowHandle<MockHandle>>,
}

impl MockDisplayServer {
    pub fn with_window(handle: MockHandle, geometry: Geometry) -> Self {
        Self {
            windows: vec![(WindowHandle(handle), geometry)],
            ..Self::default()
        }
    }

    /// Simulates the window closing behind our back.
    pub fn close(&mut self, handle: MockHandle) {
        self.windows.retain(|(h, _)| h.0 != handle);
    }

    /// Simulates the application moving or resizing its window on its own.
    pub fn reshape(&mut self, handle: MockHandle, geometry: Geometry) {
        if let Some((_, g)) = self.windows.iter_mut().find(|(h, _)| h.0 == handle) {
            *g = geometry;
        }
    }

    pub fn geometry_writes(&self) -> usize {
        self.actions.iter().filter(|a| a.is_geometry_write()).count()
    }
}

impl DisplayServer<MockHandle> for MockDisplayServer {
    fn window_at(&self, point: Point) -> Option<(WindowHandle<MockHandle>, Geometry)> {
        self.windows
            .iter()
            .find(|(_, g)| g.contains_point(point))
            .cloned()
    }

    fn geometry(&self, handle: &WindowHandle<MockHandle>) -> Option<Geometry> {
        self.windows
            .iter()
            .find(|(h, _)| h == handle)
            .map(|(_, g)| *g)
    }

    fn execute_action(&mut self, act: DisplayAction<MockHandle>) -> Result<()> {
        let handle = act.window().clone();
        if self.read_only.contains(&handle) && act.is_geometry_write() {
            return Err(HoldfastError::WindowLost);
        }
        if self.unraisable.contains(&handle) && matches!(act, DisplayAction::MoveToTop(_)) {
            return Err(HoldfastError::WindowLost);
        }
        let Some((_, geometry)) = self.windows.iter_mut().find(|(h, _)| *h == handle) else {
            return Err(HoldfastError::WindowLost);
        };
        match &act {
            DisplayAction::MoveToTop(_) => {}
            DisplayAction::SetPosition(_, p) => {
                geometry.x = p.x;
                geometry.y = p.y;
            }
            DisplayAction::SetSize(_, s) => {
                geometry.w = s.w;
                geometry.h = s.h;
            }
        }
        self.actions.push(act);
        Ok(())
    }
}
