//! The accessibility permission the event tap and window control depend on.
use crate::axwrap::{kAXTrustedCheckOptionPrompt, AXIsProcessTrusted, AXIsProcessTrustedWithOptions};
use core_foundation::base::TCFType;
use core_foundation::boolean::CFBoolean;
use core_foundation::dictionary::CFDictionary;
use core_foundation::string::CFString;

/// Whether this process may observe input and control other applications' windows.
pub fn is_trusted() -> bool {
    unsafe { AXIsProcessTrusted() != 0 }
}

/// Checks the permission, asking the system to show its grant dialog when it is missing.
///
/// Returns the state at the time of the call. Granting happens asynchronously in System
/// Settings, so callers poll [`is_trusted`] afterwards.
pub fn request_if_needed() -> bool {
    if is_trusted() {
        return true;
    }
    let key = unsafe { CFString::wrap_under_get_rule(kAXTrustedCheckOptionPrompt) };
    let options = CFDictionary::from_CFType_pairs(&[(key, CFBoolean::true_value())]);
    let trusted = unsafe { AXIsProcessTrustedWithOptions(options.as_concrete_TypeRef()) != 0 };
    tracing::debug!("Accessibility permission requested, trusted: {}", trusted);
    trusted
}
