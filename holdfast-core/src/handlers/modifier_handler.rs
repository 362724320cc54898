use super::{Config, Handle, ModMask, Mode, State, Verdict};

impl<H: Handle> State<H> {
    /// Arms on the configured key going down, disarms on it going up.
    ///
    /// Modifier changes always reach the applications: swallowing them would leave other
    /// programs with a stuck key.
    pub fn modifiers_changed_handler(&mut self, modmask: ModMask, config: &impl Config) -> Verdict {
        let key = self.arming_key(config);
        if modmask.holds(key) {
            if self.mode.is_idle() {
                self.armed_with = key;
                self.set_mode(Mode::Armed);
            }
        } else if !self.mode.is_idle() {
            // Released mid gesture: whatever was being dragged stays where it is.
            self.disarm();
        }
        Verdict::PassThrough
    }
}
