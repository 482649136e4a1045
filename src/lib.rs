//! roomchat - Chat Room Backend
//!
//! A small HTTP chat room: participants join under a unique name, post
//! public or private messages, poll for the messages they are allowed to
//! see, and are evicted automatically once their heartbeats stop.
//!
//! # Module Structure
//!
//! - **`shared`** - Records, validation, sanitizing and visibility rules
//!   (no I/O)
//! - **`backend`** - Axum server, SQL store adapter and the inactivity
//!   sweeper
//!
//! # Usage
//!
//! ```rust,no_run
//! use roomchat::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let server = create_app(&ServerConfig::default()).await?;
//! // Serve `server.router` with axum, then:
//! server.shutdown().await;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::ValidationError` for rejected client input
//! - `backend::store::StoreError` for store failures
//! - `backend::BackendError` for everything a handler can answer with

/// Shared types and rules
pub mod shared;

/// Backend server-side code
pub mod backend;
