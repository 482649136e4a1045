//! Shared Error Types
//!
//! Errors produced by the pure, store-independent parts of the chat room:
//! payload validation and query-parameter parsing. They carry no HTTP
//! knowledge; the backend maps them onto `422 Unprocessable Entity`.
//!
//! # Usage
//!
//! ```rust
//! use roomchat::shared::error::ValidationError;
//!
//! let error = ValidationError::new("name", "must not be empty");
//! assert_eq!(error.field(), "name");
//! ```
use thiserror::Error;

/// Client input that failed a structural check
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Validation error in field '{field}': {message}")]
pub struct ValidationError {
    /// The field that failed validation
    field: String,
    /// Human-readable error message
    message: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a missing or blank required field
    pub fn empty(field: impl Into<String>) -> Self {
        Self::new(field, "must be a non-empty string")
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
