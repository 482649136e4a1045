/**
 * Message List Handler
 *
 * Implements `GET /messages`: the messages visible to the caller, oldest
 * first, optionally cut down to the most recent `limit`.
 */

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use crate::backend::error::BackendError;
use crate::backend::middleware::ChatUser;
use crate::backend::store::Store;
use crate::shared::visibility::{parse_limit, tail, visible_messages};
use crate::shared::Message;

/// Query parameters of `GET /messages`
///
/// `limit` is taken as a raw string so that a non-numeric value is
/// reported as a validation error instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub limit: Option<String>,
}

/// Handle `GET /messages`
///
/// # Errors
///
/// * `422 Unprocessable Entity` - `limit` is not a positive integer, or the
///   query string does not decode
pub async fn handle_list_messages(
    State(store): State<Store>,
    user: ChatUser,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Message>>, BackendError> {
    let Query(query) = query?;
    let limit = parse_limit(query.limit.as_deref())?;
    let all = store.messages().find().await?;

    let visible = tail(visible_messages(all, user.name()), limit);
    Ok(Json(visible))
}
