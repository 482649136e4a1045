/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all routes into a single Axum router.
 *
 * # Layers
 *
 * - `TraceLayer` opens a tracing span per request
 * - `CorsLayer` allows every origin, method and header
 */

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use chrono::Local;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::chat::handlers::{
    handle_delete_message, handle_edit_message, handle_list_messages, handle_post_message,
};
use crate::backend::participants::handlers::{handle_heartbeat, handle_join, handle_list_participants};
use crate::backend::server::state::AppState;
use crate::backend::sweeper::{SweepStats, SweepTotals};

/// Create the Axum router with all routes configured
///
/// # Routes
///
/// - `GET /` - Liveness line with the server time
/// - `GET /health` - Sweeper counters
/// - `POST /participants` - Join the room
/// - `GET /participants` - List participants
/// - `POST /status` - Heartbeat
/// - `POST /messages` - Post a message
/// - `GET /messages` - List visible messages
/// - `PUT /messages/{id}` - Replace own message
/// - `DELETE /messages/{id}` - Delete own message
///
/// Unknown routes answer `404 Not Found`.
pub fn create_router(app_state: AppState) -> Router<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route(
            "/participants",
            post(handle_join).get(handle_list_participants),
        )
        .route("/status", post(handle_heartbeat))
        .route(
            "/messages",
            post(handle_post_message).get(handle_list_messages),
        )
        .route(
            "/messages/{id}",
            put(handle_edit_message).delete(handle_delete_message),
        )
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(app_state)
}

async fn handle_root() -> String {
    format!("Hello World =>{}", Local::now().format("%d/%m/%Y %H:%M:%S"))
}

#[derive(serde::Serialize)]
struct Health {
    status: &'static str,
    sweeper: SweepTotals,
}

async fn handle_health(State(stats): State<Arc<SweepStats>>) -> Json<Health> {
    Json(Health {
        status: "ok",
        sweeper: stats.totals(),
    })
}
