//! Message Visibility
//!
//! Decides which stored messages a requester may read. Public messages and
//! room notices are visible to everyone; a private message is visible only
//! to its sender and its recipient. Order is always insertion order.

use std::num::NonZeroUsize;

use crate::shared::error::ValidationError;
use crate::shared::message::Message;

/// Whether `requester` may read `message`
///
/// An anonymous requester (`None`) only sees public messages.
pub fn is_visible_to(message: &Message, requester: Option<&str>) -> bool {
    if message.kind.is_public() {
        return true;
    }
    match requester {
        Some(user) => message.to == user || message.from == user,
        None => false,
    }
}

/// Filter `all` down to what `requester` may read, keeping order
pub fn visible_messages<I>(all: I, requester: Option<&str>) -> Vec<Message>
where
    I: IntoIterator<Item = Message>,
{
    all.into_iter()
        .filter(|message| is_visible_to(message, requester))
        .collect()
}

/// Keep only the last `limit` messages, still oldest first
pub fn tail(mut messages: Vec<Message>, limit: Option<NonZeroUsize>) -> Vec<Message> {
    if let Some(limit) = limit {
        let start = messages.len().saturating_sub(limit.get());
        messages = messages.split_off(start);
    }
    messages
}

/// Parse the `limit` query parameter
///
/// Absent means no limit. Anything other than a positive integer is an
/// error rather than being ignored.
pub fn parse_limit(raw: Option<&str>) -> Result<Option<NonZeroUsize>, ValidationError> {
    match raw {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<NonZeroUsize>()
            .map(Some)
            .map_err(|_| ValidationError::new("limit", format!("'{}' is not a positive integer", raw))),
    }
}
