use crate::models::Point;
use crate::utils::modmask_lookup::ModMask;

/// Input events normalized by the event source.
///
/// Every variant carries the modifier snapshot the event was delivered with. Pointer
/// locations are in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DisplayEvent {
    ModifiersChanged(ModMask),
    ButtonDown(ModMask, Point),
    ButtonUp(ModMask, Point),
    /// The pointer moved with the button held.
    Dragged(ModMask, Point),
}

impl DisplayEvent {
    pub const fn modifiers(&self) -> ModMask {
        match self {
            Self::ModifiersChanged(m)
            | Self::ButtonDown(m, _)
            | Self::ButtonUp(m, _)
            | Self::Dragged(m, _) => *m,
        }
    }
}

/// What the event source does with the native event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Swallow it, the application under the pointer never sees it.
    Consume,
    /// Deliver it unchanged.
    PassThrough,
}

impl Verdict {
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consume)
    }
}
