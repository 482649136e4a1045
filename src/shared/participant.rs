//! Participant Data Structure
//!
//! A participant is a named session in the room, kept alive by periodic
//! heartbeats. `lastStatus` is milliseconds since the Unix epoch.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::shared::sanitize::sanitize;

/// A participant currently in the room
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Unique display name
    pub name: String,
    /// Last heartbeat, in Unix milliseconds
    pub last_status: i64,
}

impl Participant {
    pub fn new(name: impl Into<String>, last_status: i64) -> Self {
        Self {
            name: name.into(),
            last_status,
        }
    }
}

/// Body of `POST /participants`
///
/// Keys other than `name` are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ParticipantPayload {
    #[serde(default)]
    pub name: Option<String>,
}

impl ParticipantPayload {
    pub fn sanitized(self) -> Self {
        Self {
            name: self.name.as_deref().map(sanitize),
        }
    }
}

/// Current wall-clock time in Unix milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
