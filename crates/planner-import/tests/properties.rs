//! Property checks for delimiter detection and importer determinism.

use planner_import::{Delimiter, detect_delimiter, import, split_line};
use proptest::prelude::*;

proptest! {
    #[test]
    fn any_tab_forces_tab_delimiter(prefix in ".*", suffix in ".*") {
        let text = format!("{prefix}\t{suffix}");
        prop_assert_eq!(detect_delimiter(&text), Delimiter::Tab);
    }

    #[test]
    fn semicolon_without_comma_detects_semicolon(text in "[^,\t]*;[^,\t]*") {
        prop_assert_eq!(detect_delimiter(&text), Delimiter::Semicolon);
    }

    #[test]
    fn no_tab_no_semicolon_defaults_to_comma(text in "[a-zA-Z0-9 .,/-]*") {
        prop_assert_eq!(detect_delimiter(&text), Delimiter::Comma);
    }

    #[test]
    fn unquoted_comma_split_matches_naive_split(line in "[a-zA-Z0-9 ;.,]*") {
        let scanned = split_line(&line, Delimiter::Comma);
        let naive: Vec<String> = line.split(',').map(str::to_string).collect();
        prop_assert_eq!(scanned, naive);
    }

    #[test]
    fn import_is_deterministic_for_arbitrary_text(text in ".*") {
        let first = import(&text);
        let second = import(&text);
        prop_assert_eq!(format!("{first:?}"), format!("{second:?}"));
    }
}
