/**
 * Server Initialization
 *
 * This module handles the initialization and teardown of the chat server.
 *
 * # Initialization Process
 *
 * 1. Open the store pool and apply migrations
 * 2. Spawn the inactivity sweeper on its own task
 * 3. Create and configure the router
 *
 * # Shutdown Process
 *
 * 1. Stop the sweeper, letting a tick in flight finish
 * 2. Close the store pool
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::{Store, StoreError};
use crate::backend::sweeper::Sweeper;

/// A fully initialized chat server
///
/// Owns the resources that must be torn down in order on shutdown.
pub struct ChatServer {
    pub router: Router<()>,
    store: Store,
    sweeper: Sweeper,
}

impl ChatServer {
    /// Stop background work and release the store
    pub async fn shutdown(self) {
        tracing::info!("Shutting down chat server");
        self.sweeper.shutdown().await;
        self.store.close().await;
    }
}

/// Create and configure the application
///
/// # Errors
///
/// Unlike optional services, the store is required: failing to open it or
/// to migrate it aborts startup.
pub async fn create_app(config: &ServerConfig) -> Result<ChatServer, StoreError> {
    tracing::info!("Initializing chat backend server");

    let store = Store::connect(
        &config.database_url,
        config.max_connections,
        config.store_timeout,
    )
    .await?;

    let sweeper = Sweeper::spawn(store.clone(), config.sweeper());
    let app_state = AppState::new(store.clone(), sweeper.stats());
    let router = create_router(app_state);

    tracing::info!("Router configured with inactivity sweeper");

    Ok(ChatServer {
        router,
        store,
        sweeper,
    })
}
