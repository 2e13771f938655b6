//! Error types for calculator operations.
//!
//! This module provides the error hierarchy using `thiserror` for
//! expression validation, model evaluation, and CLI commands.

use thiserror::Error;

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for calculator operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Local expression validation errors.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Evaluation endpoint errors.
    #[error("evaluation error: {0}")]
    Evaluation(#[from] EvalError),

    /// I/O errors (terminal and file operations).
    #[error("I/O error: {0}")]
    Io(String),

    /// Command execution failures (runtime startup and similar).
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),
}

/// Validation errors raised before an expression leaves the process.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Expression text is empty or whitespace.
    #[error("expression is empty")]
    EmptyExpression,

    /// Literal division by zero detected in the expression text.
    #[error("Division by zero is not allowed.")]
    DivisionByZero,
}

/// Errors from the external evaluation endpoint.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Request could not be constructed.
    #[error("request build failed: {0}")]
    Request(String),

    /// Transport or API failure while calling the endpoint.
    #[error("model call failed: {0}")]
    Api(String),

    /// The endpoint returned no usable content.
    #[error("model returned an empty reply")]
    EmptyResponse,

    /// The reply could not be parsed as a numeric result.
    #[error("unparsable model reply: {reply}")]
    Malformed {
        /// Truncated reply text.
        reply: String,
    },

    /// The reply parsed to a non-finite number.
    #[error("model returned a non-finite result: {value}")]
    NonFinite {
        /// The offending value.
        value: f64,
    },
}

// Implement From traits for standard library errors

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
