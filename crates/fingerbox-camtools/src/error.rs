//! Error types for the CAM tools crate.
//!
//! Geometry generation itself never fails; these cover parameter
//! validation, edge style parsing and writing exported files.

use std::io;
use thiserror::Error;

/// Errors that can occur during CAM tool operations.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Errors related to box parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// An edge style name was not recognised.
    #[error("Unknown edge style '{0}' (expected finger, holes, flush-holes or open)")]
    UnknownEdgeStyle(String),
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;
