//! Backend Module
//!
//! All server-side code of the chat room: the Axum HTTP server, the store
//! adapter and the inactivity sweeper.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, startup and shutdown
//! - **`routes`** - Router assembly and middleware layers
//! - **`participants`** - Join, list and heartbeat handlers
//! - **`chat`** - Message handlers
//! - **`store`** - Connection pool and collection-scoped CRUD
//! - **`sweeper`** - Background eviction of inactive participants
//! - **`middleware`** - `user` header extraction
//! - **`error`** - Backend error types
//!
//! # State Management
//!
//! Handlers share one `AppState` holding the store handle. The store owns
//! the only connection pool; the sweeper holds a clone of the same handle.
//! There are no in-process locks: uniqueness and ownership are enforced by
//! the store's writes.
//!
//! # Example
//!
//! ```rust,no_run
//! use roomchat::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let server = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, server.router.clone()).await?;
//! server.shutdown().await;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Participant handlers
pub mod participants;

/// Message handlers
pub mod chat;

/// Chat store adapter
pub mod store;

/// Inactivity sweeper
pub mod sweeper;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use routes::create_router;
pub use server::{create_app, AppState, ServerConfig};
pub use store::Store;
pub use sweeper::Sweeper;
