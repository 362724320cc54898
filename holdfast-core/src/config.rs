//! Settings the gesture core reads.
use crate::utils::modmask_lookup::ModifierKey;

/// Smallest width or height a resize leaves a window with.
pub const DEFAULT_MIN_WINDOW_SIZE: f64 = 50.0;

pub trait Config {
    /// The key that arms a gesture.
    ///
    /// Called on the input callback thread; implementations must not block.
    fn modifier_key(&self) -> ModifierKey;

    fn min_window_size(&self) -> f64 {
        DEFAULT_MIN_WINDOW_SIZE
    }
}

#[cfg(test)]
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Debug, Default)]
pub struct TestConfig {
    pub modifier_key: ModifierKey,
}

#[cfg(test)]
impl Config for TestConfig {
    fn modifier_key(&self) -> ModifierKey {
        self.modifier_key
    }
}
