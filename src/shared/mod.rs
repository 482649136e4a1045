//! Shared Module
//!
//! Store-independent types and rules of the chat room: the participant and
//! message records, payload validation, markup sanitizing and the message
//! visibility filter. Nothing here performs I/O.

/// Message record, type tag and payload
pub mod message;

/// Participant record and payload
pub mod participant;

/// Shared error types
pub mod error;

/// Markup stripping
pub mod sanitize;

/// Payload validation
pub mod validation;

/// Message visibility rules
pub mod visibility;

/// Re-export commonly used types for convenience
pub use error::ValidationError;
pub use message::{Message, MessageKind, MessagePayload, NewMessage};
pub use participant::{Participant, ParticipantPayload};
pub use validation::{ValidMessage, ValidName};
