//! Errors reported by display servers back to the gesture core.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HoldfastError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HoldfastError {
    /// The window behind a handle is gone (closed, or its process quit).
    #[error("window is no longer available")]
    WindowLost,
    /// The window exists but rejected the request.
    #[error("window refused the request: {0}")]
    Refused(String),
}

impl HoldfastError {
    /// Whether the error means the handle must not be used again.
    pub const fn is_window_lost(&self) -> bool {
        matches!(self, Self::WindowLost)
    }
}
