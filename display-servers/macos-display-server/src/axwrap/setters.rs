//! `AXWrap` setters.
use super::{
    attribute, check, AXUIElement, AXValue, AXWrap, AXUIElementPerformAction,
    AXUIElementSetAttributeValue, AXValueCreate, AX_FRONTMOST, AX_POSITION, AX_RAISE, AX_SIZE,
    K_AX_VALUE_TYPE_CG_POINT, K_AX_VALUE_TYPE_CG_SIZE,
};
use crate::{Error, Result};
use core_foundation::base::{CFTypeRef, TCFType};
use core_foundation::boolean::CFBoolean;
use core_graphics::geometry::{CGPoint, CGSize};
use holdfast_core::models::{Point, Size};
use std::ptr;

impl AXWrap {
    /// Moves a window's top left corner.
    /// # Errors
    ///
    /// Will error if the window is gone or refuses to move.
    pub fn set_position(&self, element: &AXUIElement, position: Point) -> Result<()> {
        let point = CGPoint::new(position.x, position.y);
        let value = new_ax_value(K_AX_VALUE_TYPE_CG_POINT, ptr::addr_of!(point).cast())?;
        self.set_attribute(element, AX_POSITION, value.as_CFTypeRef())
    }

    /// Resizes a window.
    /// # Errors
    ///
    /// Will error if the window is gone or refuses to resize.
    pub fn set_size(&self, element: &AXUIElement, size: Size) -> Result<()> {
        let size = CGSize::new(size.w, size.h);
        let value = new_ax_value(K_AX_VALUE_TYPE_CG_SIZE, ptr::addr_of!(size).cast())?;
        self.set_attribute(element, AX_SIZE, value.as_CFTypeRef())
    }

    /// Raises a window above the other windows of its application.
    /// # Errors
    ///
    /// Will error if the window is gone.
    pub fn raise(&self, element: &AXUIElement) -> Result<()> {
        let action = attribute(AX_RAISE);
        check(unsafe {
            AXUIElementPerformAction(element.as_concrete_TypeRef(), action.as_concrete_TypeRef())
        })
    }

    /// Brings the application owning `element` to the front.
    /// # Errors
    ///
    /// Will error if the element or its application is gone.
    pub fn activate_owner(&self, element: &AXUIElement) -> Result<()> {
        let pid = self.get_pid(element)?;
        let app = AXUIElement::application(pid);
        self.set_attribute(&app, AX_FRONTMOST, CFBoolean::true_value().as_CFTypeRef())
    }

    fn set_attribute(
        &self,
        element: &AXUIElement,
        name: &'static str,
        value: CFTypeRef,
    ) -> Result<()> {
        let name = attribute(name);
        check(unsafe {
            AXUIElementSetAttributeValue(
                element.as_concrete_TypeRef(),
                name.as_concrete_TypeRef(),
                value,
            )
        })
    }
}

fn new_ax_value(value_type: u32, value: *const std::os::raw::c_void) -> Result<AXValue> {
    let raw = unsafe { AXValueCreate(value_type, value) };
    if raw.is_null() {
        return Err(Error::UnexpectedValue("AXValue"));
    }
    Ok(unsafe { AXValue::wrap_under_create_rule(raw) })
}
