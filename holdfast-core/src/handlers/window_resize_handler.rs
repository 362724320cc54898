use super::{
    Config, DisplayAction, DisplayServer, Geometry, Handle, Mode, Point, ResizeSection, State,
    Verdict,
};

impl<H: Handle> State<H> {
    /// Handles a drag while resizing. Returns `None` when no resize is in progress.
    ///
    /// Letting go of Shift switches back to moving, re-anchored on the window's current
    /// geometry and the current pointer.
    pub fn window_resize_handler(
        &mut self,
        shift: bool,
        point: Point,
        server: &impl DisplayServer<H>,
        config: &impl Config,
    ) -> Option<Verdict> {
        let Mode::ResizingWindow {
            window,
            anchor,
            pointer,
            section,
        } = &self.mode
        else {
            return None;
        };

        if !shift {
            let window = window.clone();
            match server.geometry(&window) {
                Some(fresh) => self.set_mode(Mode::MovingWindow {
                    window,
                    anchor: fresh,
                    pointer: point,
                }),
                None => {
                    tracing::debug!("Window {:?} vanished before moving", window);
                    self.end_drag();
                }
            }
            return Some(Verdict::Consume);
        }

        let target = resize_geometry(anchor, *section, point - *pointer, config.min_window_size());
        let window = window.clone();
        self.actions
            .push_back(DisplayAction::SetPosition(window.clone(), target.position()));
        self.actions
            .push_back(DisplayAction::SetSize(window, target.size()));
        Some(Verdict::Consume)
    }
}

/// Applies a pointer delta to the selected edges of `anchor`.
///
/// The raw edge deltas are applied first and the minimum size second. When clamping a
/// side whose near edge was moving (left, top) the position is pulled back so that the
/// opposite edge stays where it was.
pub fn resize_geometry(
    anchor: &Geometry,
    section: ResizeSection,
    delta: Point,
    min_size: f64,
) -> Geometry {
    let mut target = *anchor;

    if section.left {
        target.x += delta.x;
        target.w -= delta.x;
    }
    if section.right {
        target.w += delta.x;
    }
    if section.top {
        target.y += delta.y;
        target.h -= delta.y;
    }
    if section.bottom {
        target.h += delta.y;
    }

    if target.w < min_size {
        if section.left {
            target.x -= min_size - target.w;
        }
        target.w = min_size;
    }
    if target.h < min_size {
        if section.top {
            target.y -= min_size - target.h;
        }
        target.h = min_size;
    }

    target
}

#[cfg(test)]
mod tests {
    use super::resize_geometry;
    use crate::config::DEFAULT_MIN_WINDOW_SIZE;
    use crate::display_servers::MockDisplayServer;
    use crate::models::{Geometry, Point, ResizeSection, Size, WindowHandle};
    use crate::{DisplayAction, DisplayEvent, Manager, ModMask, Mode, Verdict};

    const OPTION: ModMask = ModMask::Option;
    const OPTION_SHIFT: ModMask = ModMask::Option.union(ModMask::Shift);

    const TOP_LEFT: ResizeSection = ResizeSection {
        left: true,
        top: true,
        right: false,
        bottom: false,
    };

    #[test]
    fn clamp_keeps_the_opposite_edge_fixed() {
        let anchor = Geometry::new(0.0, 0.0, 200.0, 200.0);
        let result = resize_geometry(
            &anchor,
            TOP_LEFT,
            Point::new(170.0, 170.0),
            DEFAULT_MIN_WINDOW_SIZE,
        );
        assert_eq!(result, Geometry::new(150.0, 150.0, 50.0, 50.0));
    }

    #[test]
    fn clamp_on_the_far_edges_leaves_the_position_alone() {
        let anchor = Geometry::new(10.0, 20.0, 200.0, 200.0);
        let result = resize_geometry(
            &anchor,
            ResizeSection::BOTTOM_RIGHT,
            Point::new(-400.0, -180.0),
            DEFAULT_MIN_WINDOW_SIZE,
        );
        assert_eq!(result, Geometry::new(10.0, 20.0, 50.0, 50.0));
    }

    #[test]
    fn growing_from_the_left_moves_the_origin() {
        let anchor = Geometry::new(300.0, 300.0, 200.0, 100.0);
        let left_only = ResizeSection {
            left: true,
            top: false,
            right: false,
            bottom: false,
        };
        let result = resize_geometry(
            &anchor,
            left_only,
            Point::new(-50.0, 999.0),
            DEFAULT_MIN_WINDOW_SIZE,
        );
        assert_eq!(result, Geometry::new(250.0, 300.0, 250.0, 100.0));
    }

    #[test]
    fn unselected_edges_are_carried_through() {
        let anchor = Geometry::new(5.0, 6.0, 700.0, 500.0);
        let right_only = ResizeSection {
            left: false,
            top: false,
            right: true,
            bottom: false,
        };
        let result = resize_geometry(
            &anchor,
            right_only,
            Point::new(30.0, -80.0),
            DEFAULT_MIN_WINDOW_SIZE,
        );
        assert_eq!(result, Geometry::new(5.0, 6.0, 730.0, 500.0));
    }

    fn resizing_from(
        geometry: Geometry,
        grab: Point,
    ) -> Manager<i32, crate::config::TestConfig, MockDisplayServer> {
        let mut manager = Manager::new_test(MockDisplayServer::with_window(1, geometry));
        manager.handle_event(DisplayEvent::ModifiersChanged(OPTION));
        manager.handle_event(DisplayEvent::ButtonDown(OPTION_SHIFT, grab));
        manager.display_server.actions.clear();
        manager
    }

    #[test]
    fn resize_writes_position_then_size() {
        let mut manager = resizing_from(
            Geometry::new(0.0, 0.0, 200.0, 200.0),
            Point::new(10.0, 10.0),
        );
        let verdict = manager.handle_event(DisplayEvent::Dragged(
            OPTION_SHIFT,
            Point::new(180.0, 180.0),
        ));
        assert_eq!(verdict, Verdict::Consume);
        assert_eq!(
            manager.display_server.actions,
            vec![
                DisplayAction::SetPosition(WindowHandle(1), Point::new(150.0, 150.0)),
                DisplayAction::SetSize(WindowHandle(1), Size::new(50.0, 50.0)),
            ]
        );
    }

    #[test]
    fn repeating_a_clamped_resize_event_lands_in_the_same_place() {
        let mut manager = resizing_from(
            Geometry::new(0.0, 0.0, 200.0, 200.0),
            Point::new(10.0, 10.0),
        );
        let event = DisplayEvent::Dragged(OPTION_SHIFT, Point::new(180.0, 180.0));
        manager.handle_event(event);
        let first = manager.display_server.windows[0].1;
        manager.handle_event(event);

        assert_eq!(first, Geometry::new(150.0, 150.0, 50.0, 50.0));
        assert_eq!(manager.display_server.windows[0].1, first);
        let actions = &manager.display_server.actions;
        assert_eq!(actions.len(), 4);
        assert_eq!(actions[..2], actions[2..]);
    }

    #[test]
    fn section_stays_fixed_for_the_whole_resize() {
        let mut manager = resizing_from(
            Geometry::new(0.0, 0.0, 300.0, 300.0),
            Point::new(290.0, 290.0),
        );
        manager.handle_event(DisplayEvent::Dragged(OPTION_SHIFT, Point::new(20.0, 20.0)));
        manager.handle_event(DisplayEvent::Dragged(OPTION_SHIFT, Point::new(300.0, 310.0)));
        let Mode::ResizingWindow { section, .. } = manager.state.mode else {
            panic!("expected a resize");
        };
        assert_eq!(section, ResizeSection::BOTTOM_RIGHT);
        assert_eq!(
            manager.display_server.windows[0].1,
            Geometry::new(0.0, 0.0, 310.0, 320.0)
        );
    }

    #[test]
    fn releasing_shift_switches_to_move_with_a_fresh_pointer_anchor() {
        let mut manager = resizing_from(
            Geometry::new(0.0, 0.0, 300.0, 300.0),
            Point::new(290.0, 290.0),
        );
        manager.handle_event(DisplayEvent::Dragged(OPTION_SHIFT, Point::new(390.0, 340.0)));
        let verdict = manager.handle_event(DisplayEvent::Dragged(OPTION, Point::new(395.0, 345.0)));
        assert_eq!(verdict, Verdict::Consume);
        assert_eq!(
            manager.state.mode,
            Mode::MovingWindow {
                window: WindowHandle(1),
                anchor: Geometry::new(0.0, 0.0, 400.0, 350.0),
                pointer: Point::new(395.0, 345.0),
            }
        );

        manager.display_server.actions.clear();
        manager.handle_event(DisplayEvent::Dragged(OPTION, Point::new(405.0, 345.0)));
        assert_eq!(
            manager.display_server.actions,
            vec![DisplayAction::SetPosition(
                WindowHandle(1),
                Point::new(10.0, 0.0)
            )]
        );
    }

    #[test]
    fn window_closed_before_switch_back_aborts_to_armed() {
        let mut manager = resizing_from(
            Geometry::new(0.0, 0.0, 300.0, 300.0),
            Point::new(290.0, 290.0),
        );
        manager.display_server.close(1);
        let verdict = manager.handle_event(DisplayEvent::Dragged(OPTION, Point::new(200.0, 200.0)));
        assert_eq!(verdict, Verdict::Consume);
        assert_eq!(manager.state.mode, Mode::Armed);
        assert_eq!(manager.display_server.geometry_writes(), 0);
    }

    #[test]
    fn failed_write_drops_the_rest_of_the_gesture() {
        let mut manager = resizing_from(
            Geometry::new(0.0, 0.0, 300.0, 300.0),
            Point::new(290.0, 290.0),
        );
        manager.display_server.close(1);
        manager.handle_event(DisplayEvent::Dragged(OPTION_SHIFT, Point::new(300.0, 300.0)));
        assert_eq!(manager.state.mode, Mode::Armed);
        assert!(manager.state.actions.is_empty());
        assert_eq!(manager.display_server.geometry_writes(), 0);
    }
}
