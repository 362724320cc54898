//! Error handling and reporting for this backend

use holdfast_core::HoldfastError;
use thiserror::Error;

use crate::axwrap::{AXError, K_AX_ERROR_INVALID_UI_ELEMENT};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Accessibility permission has not been granted.")]
    PermissionDenied,
    #[error("Could not create the event tap.")]
    TapCreation,
    #[error("Could not attach the event tap to the run loop.")]
    RunLoopSource,

    // Errors from the accessibility API
    #[error("Accessibility call failed with code {0}.")]
    Ax(AXError),
    #[error("Accessibility attribute {0} held an unexpected value.")]
    UnexpectedValue(&'static str),
}

impl From<Error> for HoldfastError {
    fn from(err: Error) -> Self {
        match err {
            Error::Ax(K_AX_ERROR_INVALID_UI_ELEMENT) => Self::WindowLost,
            other => Self::Refused(other.to_string()),
        }
    }
}
