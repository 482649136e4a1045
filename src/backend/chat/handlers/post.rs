/**
 * Message Post Handler
 *
 * Implements `POST /messages`: the participant named by the `user` header
 * posts a public or private message.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use super::known_sender;
use crate::backend::error::BackendError;
use crate::backend::middleware::ChatUser;
use crate::backend::store::Store;
use crate::shared::validation::prepare_message;
use crate::shared::{Message, MessagePayload, NewMessage};

/// Handle `POST /messages`
///
/// # Request Body
///
/// ```json
/// {"to": "Todos", "text": "oi galera", "type": "message"}
/// ```
///
/// # Returns
///
/// `201 Created` with the stored message
///
/// # Errors
///
/// * `422 Unprocessable Entity` - Malformed body, invalid fields, or the
///   `user` header does not name a current participant
pub async fn handle_post_message(
    State(store): State<Store>,
    user: ChatUser,
    payload: Result<Json<MessagePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), BackendError> {
    let Json(payload) = payload?;
    let content = prepare_message(payload)?;
    let from = known_sender(&store, &user).await?;

    let message = store
        .messages()
        .insert(&NewMessage::new(from, content.to, content.text, content.kind))
        .await?;

    tracing::debug!(id = %message.id, from = %message.from, kind = %message.kind, "message posted");
    Ok((StatusCode::CREATED, Json(message)))
}
