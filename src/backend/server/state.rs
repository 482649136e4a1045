/**
 * Application State Management
 *
 * This module defines the application state shared by every request
 * handler and implements the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds the store handle and the sweeper counters. The store
 * is constructed once at startup and threaded through here; there is no
 * process-global connection.
 *
 * # Example
 *
 * ```rust
 * use roomchat::backend::store::Store;
 * use axum::extract::State;
 *
 * async fn handler(State(store): State<Store>) {
 *     let _participants = store.participants().find().await;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::store::Store;
use crate::backend::sweeper::SweepStats;

/// Application state shared by all handlers
///
/// # Fields
///
/// * `store` - Chat store handle (pool inside, cheap to clone)
/// * `sweep_stats` - Counters of the inactivity sweeper
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Store,
    pub sweep_stats: Arc<SweepStats>,
}

impl AppState {
    pub fn new(store: Store, sweep_stats: Arc<SweepStats>) -> Self {
        Self { store, sweep_stats }
    }
}

/// Implement FromRef for Store
///
/// This allows Axum handlers to extract the store directly using
/// `State(Store)`.
impl FromRef<AppState> for Store {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

/// Implement FromRef for the sweeper counters
impl FromRef<AppState> for Arc<SweepStats> {
    fn from_ref(app_state: &AppState) -> Self {
        Arc::clone(&app_state.sweep_stats)
    }
}
