//! Error types for Wheelview.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Wheelview operations.
pub type Result<T> = std::result::Result<T, WheelviewError>;

/// Errors that can occur in Wheelview.
#[derive(Debug, Error)]
pub enum WheelviewError {
    /// A frame index past the end of the trajectory.
    #[error("Frame index {index} out of range for {len} samples")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of samples available.
        len: usize,
    },

    /// Rejected input: non-positive geometry, mismatched series, bad shapes.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failed to read NetCDF file.
    #[error("NetCDF error: {0}")]
    NetCDF(String),

    /// A required variable is absent from the simulation file.
    #[error("Variable not found: {name}")]
    MissingVariable {
        /// Variable name.
        name: String,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// Failed to write exported frames.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WheelviewError {
    /// Create an InvalidArgument error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a MissingVariable error.
    pub fn missing_variable(name: impl Into<String>) -> Self {
        Self::MissingVariable { name: name.into() }
    }
}

impl From<netcdf::Error> for WheelviewError {
    fn from(err: netcdf::Error) -> Self {
        Self::NetCDF(err.to_string())
    }
}
