//! # Error Types
//!
//! Structured error types for the strict calculation layer. The flat ABI in
//! [`crate::ffi`] never returns these; it maps abnormal inputs to sentinel
//! values instead.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_capacitance(c_farads: f64) -> CalcResult<()> {
//!     if c_farads <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "capacitance_f",
//!             c_farads.to_string(),
//!             "Capacitance must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, non-physical, unknown mode)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The selected formula would divide by zero
    #[error("Division by zero: {quantity} cannot be zero")]
    DivisionByZero { quantity: String },

    /// A calculation needs at least one value and got none
    #[error("Empty input: '{field}' needs at least one value")]
    EmptyInput { field: String },

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

    /// Create a DivisionByZero error
    pub fn division_by_zero(quantity: impl Into<String>) -> Self {
        CalcError::DivisionByZero {
            quantity: quantity.into(),
        }
    }

    /// Create an EmptyInput error
    pub fn empty_input(field: impl Into<String>) -> Self {
        CalcError::EmptyInput {
            field: field.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::EmptyInput { .. } => "EMPTY_INPUT",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
