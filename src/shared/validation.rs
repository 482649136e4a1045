//! Payload Validation
//!
//! Structural checks on inbound participant and message payloads. These are
//! pure functions of their input; they never touch the store.
//!
//! Callers sanitize first and validate second (see [`prepare_participant`]
//! and [`prepare_message`]), so a payload that only consists of markup is
//! rejected instead of being stored as an empty string.

use crate::shared::error::ValidationError;
use crate::shared::message::{MessageKind, MessagePayload};
use crate::shared::participant::ParticipantPayload;

/// A participant name that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidName(String);

impl ValidName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Message content that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidMessage {
    pub to: String,
    pub text: String,
    pub kind: MessageKind,
}

/// Check a participant payload
///
/// `name` must be present and non-empty after trimming.
pub fn validate_participant(payload: &ParticipantPayload) -> Result<ValidName, ValidationError> {
    let name = required("name", payload.name.as_deref())?;
    Ok(ValidName(name.to_string()))
}

/// Check a message payload
///
/// `to` and `text` must be non-empty; `type` must be `message` or
/// `private_message`. `status` is server-internal and always rejected.
pub fn validate_message(payload: &MessagePayload) -> Result<ValidMessage, ValidationError> {
    let to = required("to", payload.to.as_deref())?;
    let text = required("text", payload.text.as_deref())?;
    let kind = match required("type", payload.kind.as_deref())? {
        "message" => MessageKind::Message,
        "private_message" => MessageKind::PrivateMessage,
        other => {
            return Err(ValidationError::new(
                "type",
                format!("'{}' is not one of: message, private_message", other),
            ))
        }
    };

    Ok(ValidMessage {
        to: to.to_string(),
        text: text.to_string(),
        kind,
    })
}

/// Sanitize then validate a participant payload
pub fn prepare_participant(payload: ParticipantPayload) -> Result<ValidName, ValidationError> {
    validate_participant(&payload.sanitized())
}

/// Sanitize then validate a message payload
pub fn prepare_message(payload: MessagePayload) -> Result<ValidMessage, ValidationError> {
    validate_message(&payload.sanitized())
}

fn required<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, ValidationError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::empty(field)),
    }
}
