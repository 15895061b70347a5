//! # Error Types
//!
//! Structured error types for cost_core.
//!
//! The calculation stages themselves never fail on numeric input: a quantity
//! that is zero or negative yields `None` ("not yet computable") and negative
//! costs yield advisory [`Warning`](crate::validation::Warning)s. The errors
//! here cover structural problems only, such as an unknown field key coming
//! from a form, or an invalid display configuration.
//!
//! ## Example
//!
//! ```rust
//! use cost_core::errors::{CalcError, CalcResult};
//! use cost_core::inputs::BatchInputs;
//!
//! fn apply(inputs: &mut BatchInputs) -> CalcResult<()> {
//!     inputs.set_field("labour_total", 30000.0)?;
//!     Ok(())
//! }
//!
//! let mut inputs = BatchInputs::default();
//! assert!(apply(&mut inputs).is_ok());
//! assert_eq!(
//!     inputs.set_field("labor", 1.0).unwrap_err().error_code(),
//!     "UNKNOWN_FIELD"
//! );
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for cost_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for costing operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A value is invalid for the field it was supplied to
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A field key does not exist on the active input shape
    #[error("Unknown field '{field}' for {shape}")]
    UnknownField { field: String, shape: String },

    /// File I/O error (front ends only, the engine does no I/O)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownField error
    pub fn unknown_field(field: impl Into<String>, shape: impl Into<String>) -> Self {
        CalcError::UnknownField {
            field: field.into(),
            shape: shape.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownField { .. } => "UNKNOWN_FIELD",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::serialization(e.to_string())
    }
}
