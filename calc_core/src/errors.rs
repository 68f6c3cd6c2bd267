//! # Error Types
//!
//! Structured error types for calc_core. Every calculator reports invalid
//! input through these variants, and each variant carries a machine-readable
//! code so API routes and forms can react to it without parsing messages.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_radius(radius: f64) -> CalcResult<()> {
//!     if radius <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "radius",
//!             radius.to_string(),
//!             "Radius must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(validate_radius(-1.0).unwrap_err().error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by API clients and forms.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (wrong sign, not finite, inconsistent, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A value falls outside the accepted range
    #[error("Value for '{field}' out of range: {value} (expected {min} to {max})")]
    OutOfRange {
        field: String,
        value: String,
        min: String,
        max: String,
    },

    /// A denominator or base value is zero
    #[error("Division by zero: '{field}' must not be zero")]
    DivisionByZero { field: String },

    /// An enum-like value (unit, figure, operation) is not recognised
    #[error("Unknown value for '{field}': {value} (expected one of: {expected})")]
    UnknownValue {
        field: String,
        value: String,
        expected: String,
    },

    /// The problem is well-formed but has no (unique) solution
    #[error("No solution: {reason}")]
    NoSolution { reason: String },

    /// No calculator is registered under the requested slug
    #[error("Calculator not found: {slug}")]
    CalculatorNotFound { slug: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
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

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an OutOfRange error from numeric bounds
    pub fn out_of_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        CalcError::OutOfRange {
            field: field.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(field: impl Into<String>) -> Self {
        CalcError::DivisionByZero {
            field: field.into(),
        }
    }

    /// Create an UnknownValue error listing the accepted values
    pub fn unknown_value(field: impl Into<String>, value: impl Into<String>, expected: &[&str]) -> Self {
        CalcError::UnknownValue {
            field: field.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Create a NoSolution error
    pub fn no_solution(reason: impl Into<String>) -> Self {
        CalcError::NoSolution {
            reason: reason.into(),
        }
    }

    /// Create a CalculatorNotFound error
    pub fn calculator_not_found(slug: impl Into<String>) -> Self {
        CalcError::CalculatorNotFound { slug: slug.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        CalcError::Internal {
            message: message.into(),
        }
    }

    /// Whether the error was caused by the caller's input (HTTP 4xx) rather
    /// than by the service itself (HTTP 5xx).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::MissingField { .. }
                | CalcError::OutOfRange { .. }
                | CalcError::DivisionByZero { .. }
                | CalcError::UnknownValue { .. }
                | CalcError::NoSolution { .. }
                | CalcError::CalculatorNotFound { .. }
        )
    }

    /// The input field the error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. }
            | CalcError::MissingField { field }
            | CalcError::OutOfRange { field, .. }
            | CalcError::DivisionByZero { field }
            | CalcError::UnknownValue { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Map a request body deserialization failure to a client error.
    ///
    /// serde reports a missing field as ``missing field `name` ``; that case
    /// becomes `MISSING_FIELD`, everything else `INVALID_INPUT` on `body`.
    pub fn from_body(err: serde_json::Error) -> Self {
        let message = err.to_string();
        if let Some(rest) = message.strip_prefix("missing field `") {
            if let Some(end) = rest.find('`') {
                return CalcError::missing_field(&rest[..end]);
            }
        }
        CalcError::invalid_input("body", "", message)
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::OutOfRange { .. } => "OUT_OF_RANGE",
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::UnknownValue { .. } => "UNKNOWN_VALUE",
            CalcError::NoSolution { .. } => "NO_SOLUTION",
            CalcError::CalculatorNotFound { .. } => "CALCULATOR_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
