use core_graphics::event::{CGEvent, CGEventFlags, CGEventType};
use holdfast_core::models::Point;
use holdfast_core::{DisplayEvent, ModMask};

pub struct NativeEvent<'a>(pub CGEventType, pub &'a CGEvent);

impl<'a> From<NativeEvent<'a>> for Option<DisplayEvent> {
    fn from(native: NativeEvent) -> Self {
        let NativeEvent(event_type, event) = native;
        let mods = from_flags(event.get_flags());

        match event_type {
            // A modifier key went up or down.
            CGEventType::FlagsChanged => Some(DisplayEvent::ModifiersChanged(mods)),
            // Primary button pressed.
            CGEventType::LeftMouseDown => Some(DisplayEvent::ButtonDown(mods, location(event))),
            // Primary button released.
            CGEventType::LeftMouseUp => Some(DisplayEvent::ButtonUp(mods, location(event))),
            // Pointer moved with the primary button held.
            CGEventType::LeftMouseDragged => Some(DisplayEvent::Dragged(mods, location(event))),
            _other => None,
        }
    }
}

fn location(event: &CGEvent) -> Point {
    let p = event.location();
    Point::new(p.x, p.y)
}

/// Converts a native flag word into the snapshot the core works with.
pub fn from_flags(flags: CGEventFlags) -> ModMask {
    const PAIRS: [(CGEventFlags, ModMask); 6] = [
        (CGEventFlags::CGEventFlagShift, ModMask::Shift),
        (CGEventFlags::CGEventFlagControl, ModMask::Control),
        (CGEventFlags::CGEventFlagAlternate, ModMask::Option),
        (CGEventFlags::CGEventFlagCommand, ModMask::Command),
        (CGEventFlags::CGEventFlagAlphaShift, ModMask::CapsLock),
        (CGEventFlags::CGEventFlagSecondaryFn, ModMask::Function),
    ];
    PAIRS
        .iter()
        .filter(|(flag, _)| flags.contains(*flag))
        .fold(ModMask::Zero, |mask, (_, m)| mask | *m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_flags_are_an_empty_snapshot() {
        assert_eq!(from_flags(CGEventFlags::CGEventFlagNull), ModMask::Zero);
    }

    #[test]
    fn option_shift_maps_to_both_bits() {
        let flags = CGEventFlags::CGEventFlagAlternate | CGEventFlags::CGEventFlagShift;
        let mods = from_flags(flags);
        assert!(mods.holds(holdfast_core::ModifierKey::Option));
        assert!(mods.shift_held());
        assert!(!mods.contains(ModMask::Command));
    }

    #[test]
    fn unrelated_bits_are_ignored() {
        let flags = CGEventFlags::CGEventFlagNonCoalesced | CGEventFlags::CGEventFlagCommand;
        assert_eq!(from_flags(flags), ModMask::Command);
    }
}
