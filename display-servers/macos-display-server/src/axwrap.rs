//! A wrapper around calls to the accessibility API and related CoreGraphics functions.
// We allow this so that extern "C" declarations keep the names Apple gives them.
#![allow(non_upper_case_globals, non_snake_case)]
use core_foundation::base::{Boolean, CFTypeID, CFTypeRef, TCFType};
use core_foundation::dictionary::CFDictionaryRef;
use core_foundation::string::{CFString, CFStringRef};
use core_foundation::{declare_TCFType, impl_CFTypeDescription, impl_TCFType};
use std::os::raw::c_void;

mod getters;
mod setters;
mod window_list;

pub type AXError = i32;
pub const K_AX_ERROR_SUCCESS: AXError = 0;
pub const K_AX_ERROR_INVALID_UI_ELEMENT: AXError = -25202;
pub const K_AX_ERROR_NO_VALUE: AXError = -25212;

type AXValueType = u32;
const K_AX_VALUE_TYPE_CG_POINT: AXValueType = 1;
const K_AX_VALUE_TYPE_CG_SIZE: AXValueType = 2;

const AX_WINDOWS: &str = "AXWindows";
const AX_FOCUSED_WINDOW: &str = "AXFocusedWindow";
const AX_POSITION: &str = "AXPosition";
const AX_SIZE: &str = "AXSize";
const AX_FRONTMOST: &str = "AXFrontmost";
const AX_RAISE: &str = "AXRaise";

#[doc(hidden)]
pub enum __AXUIElement {}
pub type AXUIElementRef = *const __AXUIElement;

#[doc(hidden)]
pub enum __AXValue {}
pub type AXValueRef = *const __AXValue;

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    fn AXUIElementGetTypeID() -> CFTypeID;
    fn AXUIElementCreateApplication(pid: libc::pid_t) -> AXUIElementRef;
    fn AXUIElementCopyAttributeValue(
        element: AXUIElementRef,
        attribute: CFStringRef,
        value: *mut CFTypeRef,
    ) -> AXError;
    fn AXUIElementSetAttributeValue(
        element: AXUIElementRef,
        attribute: CFStringRef,
        value: CFTypeRef,
    ) -> AXError;
    fn AXUIElementPerformAction(element: AXUIElementRef, action: CFStringRef) -> AXError;
    fn AXUIElementGetPid(element: AXUIElementRef, pid: *mut libc::pid_t) -> AXError;

    fn AXValueGetTypeID() -> CFTypeID;
    fn AXValueCreate(value_type: AXValueType, value: *const c_void) -> AXValueRef;
    fn AXValueGetValue(value: AXValueRef, value_type: AXValueType, value_ptr: *mut c_void)
        -> Boolean;

    pub(crate) static kAXTrustedCheckOptionPrompt: CFStringRef;
    pub(crate) fn AXIsProcessTrusted() -> Boolean;
    pub(crate) fn AXIsProcessTrustedWithOptions(options: CFDictionaryRef) -> Boolean;
}

declare_TCFType!(
    /// An accessibility element: an application, a window or a control.
    AXUIElement, AXUIElementRef
);
impl_TCFType!(AXUIElement, AXUIElementRef, AXUIElementGetTypeID);
impl_CFTypeDescription!(AXUIElement);

declare_TCFType!(AXValue, AXValueRef);
impl_TCFType!(AXValue, AXValueRef, AXValueGetTypeID);

impl AXUIElement {
    /// The accessibility element of a running application.
    pub fn application(pid: libc::pid_t) -> Self {
        unsafe { Self::wrap_under_create_rule(AXUIElementCreateApplication(pid)) }
    }
}

/// Turns an accessibility return code into a `Result`.
fn check(code: AXError) -> crate::Result<()> {
    if code == K_AX_ERROR_SUCCESS {
        Ok(())
    } else {
        Err(crate::Error::Ax(code))
    }
}

fn attribute(name: &'static str) -> CFString {
    CFString::from_static_string(name)
}

/// Talks to other applications' windows on behalf of the gesture core.
pub struct AXWrap {
    /// Our own windows are never picked up under the pointer.
    own_pid: libc::pid_t,
}

impl AXWrap {
    pub fn new() -> Self {
        Self {
            own_pid: std::process::id() as libc::pid_t,
        }
    }
}

impl Default for AXWrap {
    fn default() -> Self {
        Self::new()
    }
}
