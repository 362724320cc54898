//! Handles to windows owned by other processes.
#![allow(clippy::module_name_repetitions)]

use std::fmt::Debug;

/// A trait which backend specific window handles need to implement
///
/// Handles are references into another process. They can turn stale at any moment; the
/// display server reports that as [`crate::HoldfastError::WindowLost`].
pub trait Handle: Debug + Clone + PartialEq + 'static {}

/// A Backend-agnostic handle to a window used to identify it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowHandle<H>(pub H)
where
    H: Handle;

/// Handle for testing purposes
#[cfg(test)]
pub type MockHandle = i32;
#[cfg(test)]
impl Handle for MockHandle {}
