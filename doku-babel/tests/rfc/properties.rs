//! Property tests for line-anchored rules and robustness.

use crate::common::rfc_converter;
use proptest::prelude::*;

fn plain_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ,.!?]{0,30}"
}

proptest! {
    #[test]
    fn heading_wraps_by_inverse_level(level in 1usize..=6, text in plain_text()) {
        let converter = rfc_converter();
        let md = format!("{} {}", "#".repeat(level), text);
        let bar = "=".repeat(7 - level);
        prop_assert_eq!(converter.convert(&md).unwrap(), format!("{bar} {text} {bar}"));
    }

    #[test]
    fn shallow_list_items_convert(indent in 0usize..=3, text in plain_text()) {
        let md = format!("{}- {}", " ".repeat(indent), text);
        prop_assert_eq!(rfc_converter().convert(&md).unwrap(), format!("  * {text}"));
    }

    #[test]
    fn deep_list_items_stay(indent in 4usize..=8, text in plain_text()) {
        let md = format!("{}- {}", " ".repeat(indent), text);
        prop_assert_eq!(rfc_converter().convert(&md).unwrap(), md);
    }

    #[test]
    fn converted_headings_are_stable(level in 1usize..=6, text in plain_text()) {
        let converter = rfc_converter();
        let once = converter.convert(&format!("{} {}", "#".repeat(level), text)).unwrap();
        prop_assert_eq!(converter.convert(&once).unwrap(), once);
    }

    #[test]
    fn arbitrary_input_never_panics(input in any::<String>()) {
        let _ = rfc_converter().convert(&input);
    }
}
