//! Markup stripping for free-text fields
//!
//! Every user-supplied string (participant names, recipients, message text,
//! message type and the `user` header) passes through [`sanitize`] before it
//! is validated, stored or compared.

use regex::Regex;
use std::sync::LazyLock;

/// Anything between `<` and the next `>` counts as a tag.
static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("markup tag pattern compiles"));

/// Strip markup tags and surrounding whitespace
///
/// Idempotent: once a string has been sanitized, sanitizing it again
/// returns it unchanged. A `<` left behind never has a `>` after it, so no
/// new tag can form.
///
/// ```rust
/// use roomchat::shared::sanitize::sanitize;
///
/// assert_eq!(sanitize("  <b>hello</b> "), "hello");
/// assert_eq!(sanitize("hello"), "hello");
/// ```
pub fn sanitize(text: &str) -> String {
    MARKUP_TAG.replace_all(text, "").trim().to_string()
}
