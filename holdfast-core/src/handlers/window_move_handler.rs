use super::{DisplayAction, DisplayServer, Handle, Mode, Point, ResizeSection, State, Verdict};

impl<H: Handle> State<H> {
    /// Handles a drag while moving. Returns `None` when no move is in progress.
    ///
    /// Holding Shift switches to resizing, re-anchored on the window's current geometry
    /// and the current pointer.
    pub fn window_move_handler(
        &mut self,
        shift: bool,
        point: Point,
        server: &impl DisplayServer<H>,
    ) -> Option<Verdict> {
        let Mode::MovingWindow {
            window,
            anchor,
            pointer,
        } = &self.mode
        else {
            return None;
        };

        if shift {
            let window = window.clone();
            match server.geometry(&window) {
                Some(fresh) => self.set_mode(Mode::ResizingWindow {
                    window,
                    anchor: fresh,
                    pointer: point,
                    section: ResizeSection::from_point(point, &fresh),
                }),
                None => {
                    tracing::debug!("Window {:?} vanished before resizing", window);
                    self.end_drag();
                }
            }
            return Some(Verdict::Consume);
        }

        let position = anchor.translated(point - *pointer).position();
        let act = DisplayAction::SetPosition(window.clone(), position);
        self.actions.push_back(act);
        Some(Verdict::Consume)
    }
}
