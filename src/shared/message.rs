/**
 * Message Data Structure
 *
 * This module defines the chat room's message record, its type tag and the
 * payload clients send to create or replace one.
 *
 * Messages are ordered by insertion; the `time` field is display-only and
 * never used for ordering.
 */
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::shared::sanitize::sanitize;

/// Recipient used for messages addressed to the whole room
pub const ROOM_RECIPIENT: &str = "Todos";

/// Text of the status message appended when a participant joins
pub const JOIN_TEXT: &str = "entra na sala...";

/// Text of the status message appended when a participant is evicted
pub const LEAVE_TEXT: &str = "sai da sala...";

/// Kind of a chat message
///
/// `Status` is reserved for server-generated join and departure notices and
/// is never accepted from a client.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Public message, visible to everyone
    Message,
    /// Visible only to its sender and recipient
    PrivateMessage,
    /// Server-generated room notice, visible to everyone
    Status,
}

impl MessageKind {
    /// Wire and storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Message => "message",
            MessageKind::PrivateMessage => "private_message",
            MessageKind::Status => "status",
        }
    }

    /// Parse a stored or submitted type tag
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "message" => Some(MessageKind::Message),
            "private_message" => Some(MessageKind::PrivateMessage),
            "status" => Some(MessageKind::Status),
            _ => None,
        }
    }

    /// Whether every participant may see messages of this kind
    pub fn is_public(&self) -> bool {
        matches!(self, MessageKind::Message | MessageKind::Status)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored chat message
///
/// # Fields
/// * `id` - Identifier assigned by the store
/// * `from` - Author's participant name
/// * `to` - Recipient name, or [`ROOM_RECIPIENT`]
/// * `text` - Message body
/// * `kind` - Serialized as `type`
/// * `time` - `HH:MM:SS` in server-local time, display only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: Uuid,
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub time: String,
}

/// A message that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub from: String,
    pub to: String,
    pub text: String,
    pub kind: MessageKind,
    pub time: String,
}

impl NewMessage {
    /// Create a message stamped with the current clock time
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        text: impl Into<String>,
        kind: MessageKind,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            text: text.into(),
            kind,
            time: clock_time(),
        }
    }

    /// Room notice announcing that `name` joined
    pub fn joined(name: &str) -> Self {
        Self::new(name, ROOM_RECIPIENT, JOIN_TEXT, MessageKind::Status)
    }

    /// Room notice announcing that `name` left
    pub fn left(name: &str) -> Self {
        Self::new(name, ROOM_RECIPIENT, LEAVE_TEXT, MessageKind::Status)
    }

    /// Attach the identifier the store assigned
    pub fn into_message(self, id: Uuid) -> Message {
        Message {
            id,
            from: self.from,
            to: self.to,
            text: self.text,
            kind: self.kind,
            time: self.time,
        }
    }
}

/// Body of `POST /messages` and `PUT /messages/{id}`
///
/// Every field is optional at the deserialization level so that missing
/// fields are reported by validation rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MessagePayload {
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl MessagePayload {
    /// Strip markup from every present field
    pub fn sanitized(self) -> Self {
        Self {
            to: self.to.as_deref().map(sanitize),
            text: self.text.as_deref().map(sanitize),
            kind: self.kind.as_deref().map(sanitize),
        }
    }
}

/// Current server-local time as `HH:MM:SS`
pub fn clock_time() -> String {
    Local::now().format("%H:%M:%S").to_string()
}
