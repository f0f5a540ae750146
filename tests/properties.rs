//! Property tests for the env-file parser and menu selection parsing.

use proptest::prelude::*;

use deckhand::domain::action::parse_selection;
use deckhand::envfile;

proptest! {
    #[test]
    fn env_parse_never_panics(content in "\\PC*") {
        let _ = envfile::parse(&content);
    }

    #[test]
    fn env_parse_roundtrips_simple_pairs(
        key in "[A-Z][A-Z0-9_]{0,15}",
        value in "[a-zA-Z0-9:/._-]{0,20}",
    ) {
        let content = format!("{key}={value}\n");
        let parsed = envfile::parse(&content);
        prop_assert_eq!(parsed.get(&key).map(String::as_str), Some(value.as_str()));
    }

    #[test]
    fn env_parse_comment_lines_produce_nothing(body in "[a-zA-Z0-9 =]*") {
        let content = format!("# {body}\n");
        prop_assert!(envfile::parse(&content).is_empty());
    }

    #[test]
    fn selection_in_menu_range_is_accepted(n in 1usize..=6) {
        prop_assert_eq!(parse_selection(&n.to_string(), 6).unwrap(), n - 1);
    }

    #[test]
    fn selection_above_menu_range_is_rejected(n in 7usize..10_000) {
        prop_assert!(parse_selection(&n.to_string(), 6).is_err());
    }

    #[test]
    fn non_numeric_selection_is_rejected(input in "[a-zA-Z .-]*") {
        prop_assert!(parse_selection(&input, 6).is_err());
    }
}
