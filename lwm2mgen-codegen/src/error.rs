//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Object definition parsing error.
    #[error("object definition parse error: {0}")]
    Parse(#[from] lwm2mgen_schema::ParseError),

    /// Object definition validation error.
    #[error("object definition error: {0}")]
    Schema(#[from] lwm2mgen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Inconsistency between the handler plan and the object
    /// definition, or an object state the renderer cannot express.
    /// Always a programming defect, never bad input.
    #[error("invariant violation: {message}")]
    Invariant {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates an invariant violation error with the given message.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant {
            message: message.into(),
        }
    }
}
