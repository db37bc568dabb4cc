//! Path-expression error types

use thiserror::Error;

/// Result type for path parsing operations
pub type ParseResult<T> = Result<T, PathParseError>;

/// Parse error with location information
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathParseError {
    /// Unexpected token
    #[error("Unexpected token '{token}' at position {position}")]
    UnexpectedToken {
        /// The unexpected token that was found
        token: String,
        /// Position where the token was found
        position: usize,
    },

    /// Unexpected end of input
    #[error("Unexpected end of input")]
    UnexpectedEof,

    /// Expected token
    #[error("Expected {expected} at position {position}")]
    ExpectedToken {
        /// The expected token description
        expected: String,
        /// Position where the token was expected
        position: usize,
    },

    /// Unclosed string literal
    #[error("Unclosed string literal starting at position {position}")]
    UnclosedString {
        /// Position where the unclosed string started
        position: usize,
    },

    /// Invalid literal value
    #[error("Invalid {literal_type} literal at position {position}: {value}")]
    InvalidLiteral {
        /// Type of literal that failed to parse
        literal_type: String,
        /// The invalid value that was encountered
        value: String,
        /// Position where the invalid literal was found
        position: usize,
    },
}

/// Errors that can occur while evaluating a path expression against a
/// JSON document. These are recoverable by design: a caller holding a
/// default message falls back to it instead of propagating.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Property not found on the current value
    #[error("Property {property} not found")]
    PropertyNotFound {
        /// Property name
        property: String,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for array of size {size}")]
    IndexOutOfBounds {
        /// Requested index
        index: i64,
        /// Array size
        size: usize,
    },

    /// Type error during evaluation
    #[error("Type error: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Expected type
        expected: String,
        /// Actual type found
        actual: String,
    },
}
