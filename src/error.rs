use std::io;
use thiserror::Error;

/// Custom error type for clprobe
#[derive(Error, Debug)]
pub enum ClprobeError {
    #[error("Can't init OpenCL driver: {0}")]
    DriverUnavailable(String),

    #[error("OpenCL error code {code}{} encountered in {call} at {location}", name_suffix(.name))]
    DriverCall {
        code: i32,
        name: Option<&'static str>,
        call: String,
        location: String,
    },

    #[error("Malformed value for {attribute}: expected {expected} bytes, got {actual}")]
    MalformedAttribute {
        attribute: String,
        expected: usize,
        actual: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

fn name_suffix(name: &Option<&'static str>) -> String {
    name.map(|n| format!(" ({})", n)).unwrap_or_default()
}

/// Result type alias for clprobe
pub type Result<T> = std::result::Result<T, ClprobeError>;

impl ClprobeError {
    /// Create a driver unavailable error
    pub fn driver_unavailable<S: Into<String>>(msg: S) -> Self {
        ClprobeError::DriverUnavailable(msg.into())
    }

    /// Create a malformed attribute error
    pub fn malformed_attribute<S: Into<String>>(attribute: S, expected: usize, actual: usize) -> Self {
        ClprobeError::MalformedAttribute {
            attribute: attribute.into(),
            expected,
            actual,
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ClprobeError::Other(msg.into())
    }

    /// Raw native status code, if this error came from a driver call
    pub fn status_code(&self) -> Option<i32> {
        match self {
            ClprobeError::DriverCall { code, .. } => Some(*code),
            _ => None,
        }
    }
}
