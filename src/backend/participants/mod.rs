//! Participants Module
//!
//! Join, list and heartbeat endpoints. Eviction of inactive participants
//! is the sweeper's job (`backend::sweeper`).

/// Participant handlers
pub mod handlers;

pub use handlers::{handle_heartbeat, handle_join, handle_list_participants};
