//! Objects (windows, geometry, gesture modes) used by the gesture core.
mod geometry;
mod manager;
mod mode;
mod resize_section;
mod window;

pub use geometry::{Geometry, Point, Size};
pub use manager::Manager;
pub use mode::Mode;
pub use resize_section::ResizeSection;
pub use window::Handle;
#[cfg(test)]
pub(crate) use window::MockHandle;
pub use window::WindowHandle;
