//! Backend Error Module
//!
//! Errors returned by HTTP handlers and their conversion into responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and extractor-rejection conversions
//! ```
//!
//! Store failures are logged at error level when converted; every other
//! error is an expected client mistake and only logged at debug level.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
