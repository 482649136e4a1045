//! Server Module
//!
//! Configuration, shared state and startup/shutdown of the HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Environment configuration
//! └── init.rs   - Server initialization and teardown
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Store**: one pool, migrated, shared by handlers and sweeper
//! 3. **Background Tasks**: the inactivity sweeper
//! 4. **Router Creation**: routes, CORS and request tracing

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, ChatServer};
pub use state::AppState;
