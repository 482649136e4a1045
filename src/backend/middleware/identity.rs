/**
 * Participant Identity Extractor
 *
 * The acting participant is named by the `user` request header. The value
 * is not verified in any way; it is only sanitized so that it compares
 * equal to the sanitized names stored at join time.
 */

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::shared::sanitize::sanitize;

/// Header carrying the acting participant's name
pub const USER_HEADER: &str = "user";

/// The participant named by the `user` header, if any
///
/// Missing, non-UTF-8 and markup-only headers all yield `ChatUser(None)`;
/// each handler decides what an anonymous caller may do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatUser(pub Option<String>);

impl ChatUser {
    pub fn name(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for ChatUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .headers
            .get(USER_HEADER)
            .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
            .map(sanitize)
            .filter(|name| !name.is_empty());

        Ok(ChatUser(user))
    }
}
