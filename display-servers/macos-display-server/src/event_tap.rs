//! Session-wide input interception.
use crate::event_translate::NativeEvent;
use crate::{Error, MacosDisplayServer, MacosWindowHandle, Result};
use core_foundation::base::TCFType;
use core_foundation::mach_port::{CFMachPort, CFMachPortRef};
use core_foundation::runloop::{kCFRunLoopCommonModes, CFRunLoop};
use core_graphics::event::{
    CGEvent, CGEventTap, CGEventTapLocation, CGEventTapOptions, CGEventTapPlacement,
    CGEventTapProxy, CGEventType,
};
use holdfast_core::{Config, DisplayEvent, Manager};
use std::cell::RefCell;
use std::rc::Rc;

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {
    fn CGEventTapEnable(tap: CFMachPortRef, enable: bool);
}

type MacosManager<C> = Manager<MacosWindowHandle, C, MacosDisplayServer>;

/// Feeds modifier and primary-button events into a [`Manager`] and drops the ones it consumes.
pub struct EventTap;

impl EventTap {
    const EVENTS: [CGEventType; 4] = [
        CGEventType::FlagsChanged,
        CGEventType::LeftMouseDown,
        CGEventType::LeftMouseUp,
        CGEventType::LeftMouseDragged,
    ];

    /// Installs the tap on the current thread and runs its run loop. Only returns on failure.
    ///
    /// # Errors
    ///
    /// Fails when the system refuses the tap, usually because the accessibility permission
    /// is missing, or when the tap cannot be attached to the run loop.
    pub fn run<C: Config + 'static>(manager: MacosManager<C>) -> Result<()> {
        let manager = Rc::new(RefCell::new(manager));
        let port: Rc<RefCell<Option<CFMachPort>>> = Rc::new(RefCell::new(None));

        let callback_port = port.clone();
        let tap = CGEventTap::new(
            CGEventTapLocation::Session,
            CGEventTapPlacement::HeadInsertEventTap,
            CGEventTapOptions::Default,
            Self::EVENTS.to_vec(),
            move |_proxy: CGEventTapProxy, event_type: CGEventType, event: &CGEvent| {
                on_event(&manager, &callback_port, event_type, event)
            },
        )
        .map_err(|()| Error::TapCreation)?;
        *port.borrow_mut() = Some(tap.mach_port.clone());

        let source = tap
            .mach_port
            .create_runloop_source(0)
            .map_err(|()| Error::RunLoopSource)?;
        CFRunLoop::get_current().add_source(&source, unsafe { kCFRunLoopCommonModes });
        tap.enable();

        tracing::info!("Event tap installed");
        CFRunLoop::run_current();
        tracing::info!("Event tap run loop exited");
        Ok(())
    }
}

fn on_event<C: Config>(
    manager: &RefCell<MacosManager<C>>,
    port: &RefCell<Option<CFMachPort>>,
    event_type: CGEventType,
    event: &CGEvent,
) -> Option<CGEvent> {
    match event_type {
        // The system switches the tap off when a callback is slow or on secure input.
        CGEventType::TapDisabledByTimeout | CGEventType::TapDisabledByUserInput => {
            tracing::warn!("Event tap disabled by the system, re-enabling");
            if let Some(port) = port.borrow().as_ref() {
                unsafe { CGEventTapEnable(port.as_concrete_TypeRef(), true) };
            }
            None
        }
        _ => {
            let Some(display_event) = Option::<DisplayEvent>::from(NativeEvent(event_type, event))
            else {
                return None;
            };
            let Ok(mut manager) = manager.try_borrow_mut() else {
                tracing::warn!("Event tap re-entered, passing {:?} through", display_event);
                return None;
            };
            if manager.handle_event(display_event).is_consumed() {
                // A null event is dropped by the window server.
                event.set_type(CGEventType::Null);
            }
            None
        }
    }
}
