use super::{Config, DisplayEvent, DisplayServer, Handle, Mode, State, Verdict};

impl<H: Handle> State<H> {
    /// Process one event, queueing any window changes in `self.actions`.
    ///
    /// The display server is only queried here, never written to; the caller executes the
    /// queued actions afterwards.
    pub fn display_event_handler(
        &mut self,
        event: DisplayEvent,
        config: &impl Config,
        server: &impl DisplayServer<H>,
    ) -> Verdict {
        if let DisplayEvent::ModifiersChanged(modmask) = event {
            return self.modifiers_changed_handler(modmask, config);
        }

        // The release of the arming key can get lost, for example while the OS had the
        // tap disabled. A press carries the live modifiers, so catch up before starting a
        // drag. Once a drag runs only a modifier change ends it.
        if let DisplayEvent::ButtonDown(modmask, _) = event {
            if self.mode == Mode::Armed && !modmask.holds(self.armed_with) {
                tracing::debug!("Armed without {}, disarming", self.armed_with);
                self.disarm();
                return Verdict::PassThrough;
            }
        }

        match event {
            DisplayEvent::ModifiersChanged(_) => Verdict::PassThrough,
            DisplayEvent::ButtonDown(modmask, point) => {
                self.button_down_handler(modmask, point, server)
            }
            DisplayEvent::ButtonUp(..) => self.button_up_handler(),
            DisplayEvent::Dragged(modmask, point) => {
                let shift = modmask.shift_held();
                if self.mode.is_dragging() {
                    self.window_move_handler(shift, point, server)
                        .or_else(|| self.window_resize_handler(shift, point, server, config))
                        .unwrap_or(Verdict::PassThrough)
                } else {
                    Verdict::PassThrough
                }
            }
        }
    }
}
