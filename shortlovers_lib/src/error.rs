//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer outside the network boundary.
///
/// Network failures never surface here: they are converted into
/// [`crate::NetworkResult::Error`] by [`crate::invoke`].
#[derive(Debug)]
pub enum ShortloversError {
    /// Building the API client failed.
    Client(shortlovers_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for ShortloversError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client(e) => write!(f, "Client error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for ShortloversError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Client(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<shortlovers_api::Error> for ShortloversError {
    fn from(e: shortlovers_api::Error) -> Self {
        Self::Client(e)
    }
}
