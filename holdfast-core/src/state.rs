//! The gesture state shared by all handlers.

use crate::config::Config;
use crate::models::{Handle, Mode, WindowHandle};
use crate::utils::modmask_lookup::ModifierKey;
use crate::DisplayAction;
use std::collections::VecDeque;

#[derive(Debug)]
pub struct State<H: Handle> {
    pub mode: Mode<H>,
    /// The key the current gesture was armed with. Only meaningful outside of idle, so a
    /// settings change in the middle of a gesture still lets the original key end it.
    pub armed_with: ModifierKey,
    pub actions: VecDeque<DisplayAction<H>>,
}

impl<H: Handle> Default for State<H> {
    fn default() -> Self {
        Self {
            mode: Mode::Idle,
            armed_with: ModifierKey::default(),
            actions: VecDeque::new(),
        }
    }
}

impl<H: Handle> State<H> {
    pub(crate) fn new(config: &impl Config) -> Self {
        Self {
            armed_with: config.modifier_key(),
            ..Self::default()
        }
    }

    /// The key that decides whether the next modifier change arms or disarms.
    pub(crate) fn arming_key(&self, config: &impl Config) -> ModifierKey {
        if self.mode.is_idle() {
            config.modifier_key()
        } else {
            self.armed_with
        }
    }

    pub(crate) fn set_mode(&mut self, mode: Mode<H>) {
        if self.mode.name() != mode.name() {
            tracing::debug!("Gesture {} -> {}", self.mode.name(), mode.name());
        }
        self.mode = mode;
    }

    /// Drops any drag in progress and waits for the next button press.
    pub(crate) fn end_drag(&mut self) {
        self.set_mode(Mode::Armed);
    }

    /// Back to idle, nothing queued survives.
    pub(crate) fn disarm(&mut self) {
        self.actions.clear();
        self.set_mode(Mode::Idle);
    }

    /// A display server reported `handle` as gone.
    pub(crate) fn window_lost(&mut self, handle: &WindowHandle<H>) {
        self.actions.retain(|act| act.window() != handle);
        if self.mode.window() == Some(handle) {
            tracing::debug!("Lost window {:?} mid gesture", handle);
            self.end_drag();
        }
    }
}
