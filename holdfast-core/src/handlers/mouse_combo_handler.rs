use super::{DisplayAction, DisplayServer, Handle, ModMask, Mode, Point, ResizeSection, State, Verdict};

impl<H: Handle> State<H> {
    /// Starts a drag on the window under the pointer.
    ///
    /// Shift held on the click itself starts a resize, otherwise a move. Clicks that do not
    /// land on a window, or that arrive while not armed, go through untouched.
    pub fn button_down_handler(
        &mut self,
        modmask: ModMask,
        point: Point,
        server: &impl DisplayServer<H>,
    ) -> Verdict {
        if self.mode != Mode::Armed {
            return Verdict::PassThrough;
        }
        let Some((window, geometry)) = server.window_at(point) else {
            tracing::trace!("No window at {:?}", point);
            return Verdict::PassThrough;
        };

        self.actions.push_back(DisplayAction::MoveToTop(window.clone()));
        let mode = if modmask.shift_held() {
            Mode::ResizingWindow {
                window,
                anchor: geometry,
                pointer: point,
                section: ResizeSection::from_point(point, &geometry),
            }
        } else {
            Mode::MovingWindow {
                window,
                anchor: geometry,
                pointer: point,
            }
        };
        self.set_mode(mode);
        Verdict::Consume
    }

    /// Ends a drag. The matching button down was swallowed, so the release is too.
    pub fn button_up_handler(&mut self) -> Verdict {
        if self.mode.is_dragging() {
            self.end_drag();
            return Verdict::Consume;
        }
        Verdict::PassThrough
    }
}
