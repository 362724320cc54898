use crate::config::Config;
use crate::display_event::{DisplayEvent, Verdict};
use crate::display_servers::DisplayServer;
use crate::models::Handle;
use crate::state::State;

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<H: Handle, C, SERVER> {
    pub state: State<H>,
    pub config: C,
    pub display_server: SERVER,
}

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    pub fn new(config: C, display_server: SERVER) -> Self {
        Self {
            state: State::new(&config),
            config,
            display_server,
        }
    }

    /// Feeds one input event through the gesture state and applies whatever it queued.
    ///
    /// Returns what the event source should do with the native event.
    pub fn handle_event(&mut self, event: DisplayEvent) -> Verdict {
        tracing::trace!("DisplayEvent: {:?}", event);
        let verdict =
            self.state
                .display_event_handler(event, &self.config, &self.display_server);
        self.execute_actions();
        verdict
    }

    fn execute_actions(&mut self) {
        while let Some(act) = self.state.actions.pop_front() {
            tracing::trace!("DisplayAction: {:?}", act);
            let handle = act.window().clone();
            let is_write = act.is_geometry_write();
            match self.display_server.execute_action(act) {
                Ok(()) => {}
                // Raising is best effort, only a failed write ends the drag.
                Err(err) if is_write && err.is_window_lost() => self.state.window_lost(&handle),
                Err(err) => tracing::debug!("Window {:?}: {}", handle, err),
            }
        }
    }
}

#[cfg(test)]
impl
    Manager<
        crate::models::MockHandle,
        crate::config::TestConfig,
        crate::display_servers::MockDisplayServer,
    >
{
    pub fn new_test(display_server: crate::display_servers::MockDisplayServer) -> Self {
        Self::new(crate::config::TestConfig::default(), display_server)
    }
}

#[cfg(test)]
mod tests {
    use crate::display_servers::MockDisplayServer;
    use crate::models::{Geometry, Point, WindowHandle};
    use crate::{DisplayEvent, Manager, ModMask, Mode, Verdict};

    #[test]
    fn a_window_that_refuses_to_raise_is_still_dragged() {
        let mut server = MockDisplayServer::with_window(1, Geometry::new(0.0, 0.0, 400.0, 300.0));
        server.unraisable.push(WindowHandle(1));
        let mut manager = Manager::new_test(server);
        manager.handle_event(DisplayEvent::ModifiersChanged(ModMask::Option));

        let down =
            manager.handle_event(DisplayEvent::ButtonDown(ModMask::Option, Point::new(50.0, 50.0)));
        assert_eq!(down, Verdict::Consume);
        assert!(manager.state.mode.is_dragging());

        manager.handle_event(DisplayEvent::Dragged(ModMask::Option, Point::new(70.0, 90.0)));
        assert_eq!(
            manager.display_server.windows[0].1,
            Geometry::new(20.0, 40.0, 400.0, 300.0)
        );
    }

    #[test]
    fn a_lost_write_ends_the_drag() {
        let mut manager = Manager::new_test(MockDisplayServer::with_window(
            1,
            Geometry::new(0.0, 0.0, 400.0, 300.0),
        ));
        manager.handle_event(DisplayEvent::ModifiersChanged(ModMask::Option));
        manager.handle_event(DisplayEvent::ButtonDown(ModMask::Option, Point::new(50.0, 50.0)));
        manager.display_server.close(1);

        manager.handle_event(DisplayEvent::Dragged(ModMask::Option, Point::new(70.0, 90.0)));
        assert_eq!(manager.state.mode, Mode::Armed);
    }
}
