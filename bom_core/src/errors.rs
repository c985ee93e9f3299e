//! # Error Types
//!
//! Structured error types for `bom_core`. The estimation engine itself never
//! fails — degenerate inputs degrade to zero/empty rows — so these errors
//! live at the boundary: JSON (de)serialization of job specs and file
//! loading in callers such as `bom_cli`.
//!
//! ## Example
//!
//! ```rust
//! use bom_core::errors::{EstimateError, EstimateResult};
//!
//! fn check_strip_count(count: u32) -> EstimateResult<()> {
//!     if !(1..=7).contains(&count) {
//!         return Err(EstimateError::invalid_input(
//!             "wallStripCount",
//!             count.to_string(),
//!             "Strip count must be between 1 and 7",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bom_core boundary operations
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Structured error type for job loading and serialization.
///
/// Each variant carries enough context for a caller to report the problem
/// without re-parsing message strings.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstimateError {
    /// An input value is invalid (out of range, wrong variant, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// File I/O error (job spec loading in CLI callers)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },
}

impl EstimateError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstimateError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        EstimateError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstimateError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EstimateError::InvalidInput { .. } => "INVALID_INPUT",
            EstimateError::SerializationError { .. } => "SERIALIZATION_ERROR",
            EstimateError::FileError { .. } => "FILE_ERROR",
        }
    }
}
