//! Hit-testing against the on-screen window list.
use super::AXWrap;
use core_foundation::base::{CFType, TCFType};
use core_foundation::dictionary::{CFDictionary, CFDictionaryRef};
use core_foundation::number::CFNumber;
use core_foundation::string::{CFString, CFStringRef};
use core_graphics::geometry::{CGPoint, CGRect};
use core_graphics::window::{
    copy_window_info, kCGNullWindowID, kCGWindowBounds, kCGWindowLayer,
    kCGWindowListExcludeDesktopElements, kCGWindowListOptionOnScreenOnly, kCGWindowOwnerPID,
};
use holdfast_core::models::Point;

/// The layer regular application windows live on. Menu bar, dock and overlays sit above.
const NORMAL_WINDOW_LAYER: i64 = 0;

struct WindowEntry {
    pid: libc::pid_t,
    layer: i64,
    bounds: CGRect,
}

impl AXWrap {
    /// Returns the process owning the frontmost regular window under `point`.
    pub(crate) fn get_window_owner_at(&self, point: Point) -> Option<libc::pid_t> {
        let options = kCGWindowListOptionOnScreenOnly | kCGWindowListExcludeDesktopElements;
        let windows = copy_window_info(options, kCGNullWindowID)?;
        let point = CGPoint::new(point.x, point.y);

        // The list is ordered front to back.
        windows
            .get_all_values()
            .into_iter()
            .filter_map(|raw| {
                let info: CFDictionary<CFString, CFType> =
                    unsafe { CFDictionary::wrap_under_get_rule(raw as CFDictionaryRef) };
                window_entry(&info)
            })
            .find(|entry| entry.bounds.contains(&point) && self.is_candidate(entry))
            .map(|entry| entry.pid)
    }

    fn is_candidate(&self, entry: &WindowEntry) -> bool {
        entry.pid != self.own_pid && entry.layer == NORMAL_WINDOW_LAYER
    }
}

fn window_entry(info: &CFDictionary<CFString, CFType>) -> Option<WindowEntry> {
    let pid = number(info, unsafe { kCGWindowOwnerPID })?.to_i32()?;
    let layer = number(info, unsafe { kCGWindowLayer })
        .and_then(|n| n.to_i64())
        .unwrap_or(NORMAL_WINDOW_LAYER);
    let bounds = info
        .find(&string(unsafe { kCGWindowBounds }))?
        .downcast::<CFDictionary>()?;
    let bounds = CGRect::from_dict_representation(&bounds)?;
    Some(WindowEntry { pid, layer, bounds })
}

fn number(info: &CFDictionary<CFString, CFType>, key: CFStringRef) -> Option<CFNumber> {
    info.find(&string(key))?.downcast::<CFNumber>()
}

fn string(key: CFStringRef) -> CFString {
    unsafe { CFString::wrap_under_get_rule(key) }
}
