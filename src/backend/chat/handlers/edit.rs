/**
 * Message Edit and Delete Handlers
 *
 * Implements `PUT /messages/{id}` and `DELETE /messages/{id}`. Only the
 * author of a message may change it. The ownership check is part of the
 * write itself; see `store::messages` for how 404 and 401 are told apart.
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::known_sender;
use crate::backend::error::BackendError;
use crate::backend::middleware::ChatUser;
use crate::backend::store::{OwnedWrite, Store};
use crate::shared::message::clock_time;
use crate::shared::validation::prepare_message;
use crate::shared::MessagePayload;

/// Handle `PUT /messages/{id}`
///
/// Replaces `to`, `text` and `type` and refreshes `time`.
///
/// # Errors
///
/// * `422 Unprocessable Entity` - Invalid body or unknown sender
/// * `404 Not Found` - No message with that id
/// * `401 Unauthorized` - The caller is not the message's author
pub async fn handle_edit_message(
    State(store): State<Store>,
    user: ChatUser,
    Path(id): Path<String>,
    payload: Result<Json<MessagePayload>, JsonRejection>,
) -> Result<StatusCode, BackendError> {
    let Json(payload) = payload?;
    let content = prepare_message(payload)?;
    let author = known_sender(&store, &user).await?;
    let id = parse_id(&id)?;

    let outcome = store
        .messages()
        .update_one(id, &author, &content, &clock_time())
        .await?;

    settle(outcome, id, &author, "edit")
}

/// Handle `DELETE /messages/{id}`
///
/// # Errors
///
/// * `404 Not Found` - No message with that id
/// * `401 Unauthorized` - The caller is not the message's author
pub async fn handle_delete_message(
    State(store): State<Store>,
    user: ChatUser,
    Path(id): Path<String>,
) -> Result<StatusCode, BackendError> {
    let id = parse_id(&id)?;
    // An anonymous caller owns nothing; the lookup still decides 404 vs 401.
    let author = user.name().unwrap_or_default();

    let outcome = store.messages().delete_one(id, author).await?;
    settle(outcome, id, author, "delete")
}

fn parse_id(raw: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| BackendError::not_found(format!("message '{}' not found", raw)))
}

fn settle(outcome: OwnedWrite, id: Uuid, author: &str, action: &str) -> Result<StatusCode, BackendError> {
    match outcome {
        OwnedWrite::Applied => {
            tracing::debug!(%id, author, action, "message changed by its author");
            Ok(StatusCode::OK)
        }
        OwnedWrite::NotFound => Err(BackendError::not_found(format!("message '{}' not found", id))),
        OwnedWrite::NotOwner => {
            tracing::info!(%id, author, action, "refused change to someone else's message");
            Err(BackendError::unauthorized(format!(
                "'{}' may not {} message '{}'",
                author, action, id
            )))
        }
    }
}
