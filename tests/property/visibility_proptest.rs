//! Property-based tests for message visibility

use std::num::NonZeroUsize;

use proptest::prelude::*;
use roomchat::shared::visibility::{is_visible_to, tail, visible_messages};
use roomchat::shared::{MessageKind, NewMessage};
use uuid::Uuid;

fn kind() -> impl Strategy<Value = MessageKind> {
    prop_oneof![
        Just(MessageKind::Message),
        Just(MessageKind::PrivateMessage),
        Just(MessageKind::Status),
    ]
}

fn name() -> impl Strategy<Value = String> {
    prop_oneof![Just("alice"), Just("bob"), Just("carol"), Just("Todos")].prop_map(String::from)
}

proptest! {
    #[test]
    fn test_private_visible_only_to_ends(
        from in name(),
        to in name(),
        requester in proptest::option::of(name()),
        kind in kind(),
    ) {
        let message = NewMessage::new(&from, &to, "text", kind).into_message(Uuid::new_v4());
        let visible = is_visible_to(&message, requester.as_deref());

        if kind == MessageKind::PrivateMessage {
            let expected = requester.as_deref().is_some_and(|r| r == from || r == to);
            prop_assert_eq!(visible, expected);
        } else {
            prop_assert!(visible);
        }
    }

    #[test]
    fn test_filter_preserves_order_and_limit_keeps_tail(
        entries in proptest::collection::vec((name(), name(), kind()), 0..30),
        requester in proptest::option::of(name()),
        limit in 1usize..40,
    ) {
        let all: Vec<_> = entries
            .iter()
            .enumerate()
            .map(|(i, (from, to, kind))| {
                NewMessage::new(from, to, &i.to_string(), *kind).into_message(Uuid::new_v4())
            })
            .collect();

        let visible = visible_messages(all.clone(), requester.as_deref());
        let positions: Vec<usize> = visible.iter().map(|m| m.text.parse().unwrap()).collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let limited = tail(visible.clone(), NonZeroUsize::new(limit));
        prop_assert_eq!(limited.len(), visible.len().min(limit));
        prop_assert_eq!(&limited[..], &visible[visible.len() - limited.len()..]);
    }
}
