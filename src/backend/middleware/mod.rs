//! Middleware Module
//!
//! Request-processing pieces shared by several handlers.
//!
//! - **`identity`** - Extractor for the participant named by the `user` header

pub mod identity;

pub use identity::{ChatUser, USER_HEADER};
