/**
 * Backend Error Types
 *
 * This module defines the errors a request handler can return. Each
 * variant maps to exactly one HTTP status code.
 *
 * # Error Categories
 *
 * - `Validation` - malformed client input, or an unknown sender (422)
 * - `Conflict` - participant name already taken (409)
 * - `NotFound` - missing participant or message (404)
 * - `Unauthorized` - mutation of someone else's message (401)
 * - `Store` - connectivity or query failure (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;
use crate::shared::ValidationError;

/// Errors returned by request handlers
///
/// # Usage
///
/// ```rust
/// use roomchat::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::conflict("participant 'alice' already exists");
/// assert_eq!(err.status_code(), StatusCode::CONFLICT);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Client input failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The resource already exists
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// The resource does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// The caller does not own the resource
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// The store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BackendError {
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Shorthand for a [`ValidationError`] on `field`
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::Validation(ValidationError::new(field, message))
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the client
    ///
    /// Store failures are reported generically; their details only go to
    /// the log.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Conflict { message } => message.clone(),
            Self::NotFound { message } => message.clone(),
            Self::Unauthorized { message } => message.clone(),
            Self::Store(_) => "Internal store error".to_string(),
        }
    }
}
