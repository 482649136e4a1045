//! Chat Backend Module
//!
//! Server-side message handling: posting, listing with visibility rules,
//! and author-only editing and deletion. Persistence lives in
//! `backend::store`; the visibility rules in `shared::visibility`.

/// Message handlers
pub mod handlers;

/// Re-export commonly used handlers
pub use handlers::{
    handle_delete_message, handle_edit_message, handle_list_messages, handle_post_message,
};
