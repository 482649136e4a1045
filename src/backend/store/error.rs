/**
 * Store Error Types
 *
 * Failures of the store adapter. A unique-key violation is lifted out of
 * the generic database error so callers can answer it with a conflict
 * instead of a server error.
 */

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Query or connection failure reported by the driver
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Embedded migrations could not be applied
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A store call did not complete within the configured timeout
    #[error("Store call '{operation}' timed out")]
    Timeout {
        /// Name of the operation that timed out
        operation: &'static str,
    },

    /// An insert collided with a unique key
    #[error("Duplicate key")]
    Duplicate,

    /// A stored row could not be mapped back into a record
    #[error("Corrupt row: {message}")]
    Corrupt {
        message: String,
    },
}

impl StoreError {
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt {
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() {
                return Self::Duplicate;
            }
        }
        Self::Database(err)
    }
}
