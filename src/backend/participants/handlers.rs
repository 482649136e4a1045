/**
 * Participant Handlers
 *
 * Implements joining the room, listing who is in it, and the heartbeat
 * that keeps a participant from being swept.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::ChatUser;
use crate::backend::store::{Store, StoreError};
use crate::shared::participant::now_millis;
use crate::shared::validation::prepare_participant;
use crate::shared::{NewMessage, Participant, ParticipantPayload};

/// Handle `POST /participants`
///
/// Stores the participant and its join notice in one transaction.
///
/// # Request Body
///
/// ```json
/// {"name": "alice"}
/// ```
///
/// # Errors
///
/// * `422 Unprocessable Entity` - Missing, non-string or blank name
/// * `409 Conflict` - The name is already in the room
pub async fn handle_join(
    State(store): State<Store>,
    payload: Result<Json<ParticipantPayload>, JsonRejection>,
) -> Result<StatusCode, BackendError> {
    let Json(payload) = payload?;
    let name = prepare_participant(payload)?;
    let participant = Participant::new(name.into_inner(), now_millis());

    match store.admit(&participant, &NewMessage::joined(&participant.name)).await {
        Ok(_) => {
            tracing::info!(name = %participant.name, "participant joined");
            Ok(StatusCode::CREATED)
        }
        Err(StoreError::Duplicate) => Err(BackendError::conflict(format!(
            "participant '{}' already exists",
            participant.name
        ))),
        Err(e) => Err(e.into()),
    }
}

/// Handle `GET /participants`
pub async fn handle_list_participants(
    State(store): State<Store>,
) -> Result<Json<Vec<Participant>>, BackendError> {
    Ok(Json(store.participants().find().await?))
}

/// Handle `POST /status`
///
/// Refreshes `lastStatus` of the participant named by the `user` header.
///
/// # Errors
///
/// * `404 Not Found` - Missing header or no such participant
pub async fn handle_heartbeat(
    State(store): State<Store>,
    user: ChatUser,
) -> Result<StatusCode, BackendError> {
    let name = user
        .name()
        .ok_or_else(|| BackendError::not_found("missing user header"))?;

    if store.participants().update_one(name, now_millis()).await? {
        tracing::trace!(name, "heartbeat");
        Ok(StatusCode::OK)
    } else {
        Err(BackendError::not_found(format!("participant '{}' not found", name)))
    }
}
