//! Chat Handlers Module
//!
//! Axum handlers for the `/messages` endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs  - Module exports and the shared sender check
//! ├── post.rs - POST /messages
//! ├── list.rs - GET /messages
//! └── edit.rs - PUT and DELETE /messages/{id}
//! ```

/// Message post handler
pub mod post;

/// Message list handler
pub mod list;

/// Message edit and delete handlers
pub mod edit;

pub use edit::{handle_delete_message, handle_edit_message};
pub use list::handle_list_messages;
pub use post::handle_post_message;

use crate::backend::error::BackendError;
use crate::backend::middleware::ChatUser;
use crate::backend::store::Store;

/// Resolve the `user` header to a current participant
///
/// A missing header or a name that is not in the room is a validation
/// failure (422), matching how the rest of the message body is judged.
pub(crate) async fn known_sender(store: &Store, user: &ChatUser) -> Result<String, BackendError> {
    let name = user
        .name()
        .ok_or_else(|| BackendError::invalid("user", "missing user header"))?;

    match store.participants().find_one(name).await? {
        Some(participant) => Ok(participant.name),
        None => Err(BackendError::invalid(
            "user",
            format!("'{}' is not a participant", name),
        )),
    }
}
