use std::io;
use thiserror::Error;

/// Error type for the few fallible edges of device-facts.
///
/// Field reads never fail; they fall back to documented defaults. Errors only
/// come from decoding snapshots, loading configuration, parsing enum strings
/// and starting the thermal subscription.
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("Battery error: {0}")]
    Battery(#[from] battery::Error),
}

/// Result type alias for device-facts
pub type Result<T> = std::result::Result<T, DeviceError>;

impl DeviceError {
    /// Create an invalid value error
    pub fn invalid_value<S: Into<String>>(msg: S) -> Self {
        DeviceError::InvalidValue(msg.into())
    }

    pub fn runtime<S: Into<String>>(msg: S) -> Self {
        DeviceError::Runtime(msg.into())
    }
}
