//! `AXWrap` getters.
use super::{
    attribute, check, AXUIElement, AXValue, AXWrap, AXUIElementCopyAttributeValue,
    AXUIElementGetPid, AXValueGetValue, AX_FOCUSED_WINDOW, AX_POSITION, AX_SIZE, AX_WINDOWS,
    K_AX_ERROR_NO_VALUE, K_AX_VALUE_TYPE_CG_POINT, K_AX_VALUE_TYPE_CG_SIZE,
};
use crate::{Error, Result};
use core_foundation::array::{CFArray, CFArrayRef};
use core_foundation::base::{CFType, CFTypeRef, TCFType};
use core_graphics::geometry::{CGPoint, CGSize};
use holdfast_core::models::{Geometry, Point};
use std::os::raw::c_void;
use std::ptr;

impl AXWrap {
    // Public functions.

    /// Returns the topmost regular window under `point` and its geometry.
    ///
    /// The window list names the owning process; that process's accessibility windows are
    /// then searched for the one under the point, falling back to its focused window.
    pub fn get_window_at(&self, point: Point) -> Option<(AXUIElement, Geometry)> {
        let pid = self.get_window_owner_at(point)?;
        let app = AXUIElement::application(pid);

        match self.get_windows(&app) {
            Ok(windows) => {
                let hit = windows.into_iter().find_map(|window| {
                    let geometry = self.get_geometry(&window).ok()?;
                    geometry.contains_point(point).then_some((window, geometry))
                });
                if hit.is_some() {
                    return hit;
                }
            }
            Err(err) => tracing::trace!("No window list for pid {}: {}", pid, err),
        }

        let focused = self.get_focused_window(&app).ok()?;
        let geometry = self.get_geometry(&focused).ok()?;
        Some((focused, geometry))
    }

    /// Returns the position and size of a window.
    /// # Errors
    ///
    /// Will error if the element is gone or does not expose a frame.
    pub fn get_geometry(&self, element: &AXUIElement) -> Result<Geometry> {
        let position = self.get_position(element)?;
        let size = self.get_size(element)?;
        Ok(Geometry::new(position.x, position.y, size.width, size.height))
    }

    /// Returns the process owning an element.
    /// # Errors
    ///
    /// Will error if the element is gone.
    pub fn get_pid(&self, element: &AXUIElement) -> Result<libc::pid_t> {
        let mut pid: libc::pid_t = 0;
        check(unsafe { AXUIElementGetPid(element.as_concrete_TypeRef(), &mut pid) })?;
        Ok(pid)
    }

    // Internal functions.

    fn get_windows(&self, app: &AXUIElement) -> Result<Vec<AXUIElement>> {
        let value = self.get_attribute(app, AX_WINDOWS)?;
        if value.type_of() != CFArray::<AXUIElement>::type_id() {
            return Err(Error::UnexpectedValue(AX_WINDOWS));
        }
        let windows: CFArray<AXUIElement> =
            unsafe { CFArray::wrap_under_get_rule(value.as_CFTypeRef() as CFArrayRef) };
        Ok(windows.iter().map(|w| (*w).clone()).collect())
    }

    fn get_focused_window(&self, app: &AXUIElement) -> Result<AXUIElement> {
        self.get_attribute(app, AX_FOCUSED_WINDOW)?
            .downcast_into::<AXUIElement>()
            .ok_or(Error::UnexpectedValue(AX_FOCUSED_WINDOW))
    }

    fn get_position(&self, element: &AXUIElement) -> Result<CGPoint> {
        let mut point = CGPoint::new(0.0, 0.0);
        self.get_ax_value(
            element,
            AX_POSITION,
            K_AX_VALUE_TYPE_CG_POINT,
            ptr::addr_of_mut!(point).cast(),
        )?;
        Ok(point)
    }

    fn get_size(&self, element: &AXUIElement) -> Result<CGSize> {
        let mut size = CGSize::new(0.0, 0.0);
        self.get_ax_value(
            element,
            AX_SIZE,
            K_AX_VALUE_TYPE_CG_SIZE,
            ptr::addr_of_mut!(size).cast(),
        )?;
        Ok(size)
    }

    fn get_ax_value(
        &self,
        element: &AXUIElement,
        name: &'static str,
        value_type: u32,
        out: *mut c_void,
    ) -> Result<()> {
        let value = self
            .get_attribute(element, name)?
            .downcast_into::<AXValue>()
            .ok_or(Error::UnexpectedValue(name))?;
        let ok = unsafe { AXValueGetValue(value.as_concrete_TypeRef(), value_type, out) };
        if ok == 0 {
            return Err(Error::UnexpectedValue(name));
        }
        Ok(())
    }

    fn get_attribute(&self, element: &AXUIElement, name: &'static str) -> Result<CFType> {
        let name = attribute(name);
        let mut value: CFTypeRef = ptr::null();
        check(unsafe {
            AXUIElementCopyAttributeValue(
                element.as_concrete_TypeRef(),
                name.as_concrete_TypeRef(),
                &mut value,
            )
        })?;
        if value.is_null() {
            return Err(Error::Ax(K_AX_ERROR_NO_VALUE));
        }
        Ok(unsafe { CFType::wrap_under_create_rule(value) })
    }
}
