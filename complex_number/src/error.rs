//! Error types for complex-number operations.
//!
//! Validation always precedes computation: an operation either returns
//! a fully constructed value or one of the errors defined here, never a
//! partial result.

use thiserror::Error;

/// Error type for complex-number construction and arithmetic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComplexError {
    /// An operand failed validation before the operation ran
    #[error("InvalidArgumentError: {0}")]
    InvalidArgument(String),

    /// Division by the complex zero
    #[error("DivisionByZeroError: {0}")]
    DivisionByZero(String),

    /// The operation has no defined result for the given operands
    #[error("ArithmeticError: {0}")]
    Arithmetic(String),
}

impl ComplexError {
    /// Create an invalid-argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ComplexError::InvalidArgument(msg.into())
    }

    /// Create a division-by-zero error
    pub fn division_by_zero<S: Into<String>>(msg: S) -> Self {
        ComplexError::DivisionByZero(msg.into())
    }

    /// Create an arithmetic error
    pub fn arithmetic<S: Into<String>>(msg: S) -> Self {
        ComplexError::Arithmetic(msg.into())
    }
}

/// Result type alias for complex-number operations
pub type ComplexResult<T> = Result<T, ComplexError>;
