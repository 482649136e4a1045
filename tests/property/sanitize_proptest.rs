//! Property-based tests for markup stripping
//!
//! Uses proptest to generate random inputs and verify properties

use proptest::prelude::*;
use roomchat::shared::sanitize::sanitize;

proptest! {
    #[test]
    fn test_sanitize_is_idempotent(text in ".*") {
        let once = sanitize(&text);
        prop_assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn test_sanitize_output_has_no_tags(text in "[a-z <>/]{0,40}") {
        let clean = sanitize(&text);
        prop_assert!(!regex_like_tag(&clean));
    }

    #[test]
    fn test_sanitize_leaves_plain_text(text in "[A-Za-z0-9][A-Za-z0-9 .,!?]{0,30}[A-Za-z0-9]") {
        prop_assert_eq!(sanitize(&text), text);
    }
}

/// True when `text` holds a `<` followed later by a `>`
fn regex_like_tag(text: &str) -> bool {
    match text.find('<') {
        Some(open) => text[open..].contains('>'),
        None => false,
    }
}
