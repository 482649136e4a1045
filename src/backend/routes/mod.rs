//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs    - Module exports and documentation
//! └── router.rs - Router assembly, CORS and request tracing
//! ```
//!
//! # Route Types
//!
//! ## Participant Routes
//!
//! - `POST /participants` - Join the room
//! - `GET /participants` - List participants
//! - `POST /status` - Heartbeat (`user` header)
//!
//! ## Message Routes
//!
//! - `POST /messages` - Post a message (`user` header)
//! - `GET /messages?limit=N` - Visible messages, oldest first
//! - `PUT /messages/{id}` - Replace own message
//! - `DELETE /messages/{id}` - Delete own message
//!
//! ## Service Routes
//!
//! - `GET /` - Liveness line
//! - `GET /health` - Sweeper counters

/// Main router creation
pub mod router;

// Re-export commonly used functions
pub use router::create_router;
