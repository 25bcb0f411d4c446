//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The OS rejected or does not support a chrome call
    #[error("window chrome call failed: {0}")]
    Chrome(String),

    /// OS notification subscription could not be established
    #[error("notification subscription failed: {0}")]
    Subscription(String),

    /// An OS-reported payload had the wrong shape
    #[error("malformed payload: expected {expected} bytes, got {got}")]
    MalformedPayload { expected: usize, got: usize },
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
