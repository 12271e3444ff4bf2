//! Property tests comparing the grammar against std parsing.

use proptest::prelude::*;

use parsecomb_core::ParseError;
use parsecomb_json::{parse_json, JsonValue};

proptest! {
    /// The value grammar agrees with `str::parse::<i64>` on every digit run,
    /// including ones that overflow.
    #[test]
    fn integers_agree_with_std(sign in "-?", digits in "[0-9]{1,22}") {
        let text = format!("{sign}{digits}");
        match (parse_json(&text), text.parse::<i64>()) {
            (Ok((value, rest)), Ok(expected)) => {
                prop_assert_eq!(value, JsonValue::Integer(expected));
                prop_assert_eq!(rest, "");
            }
            (Err(err), Err(_)) => {
                let is_map = matches!(err.error, ParseError::Map { .. });
                prop_assert!(is_map);
                prop_assert_eq!(err.offset, text.chars().count());
            }
            (ours, parsed) => prop_assert!(false, "{:?}: grammar ok={} vs std {:?}", text, ours.is_ok(), parsed),
        }
    }

    /// Any quote-free content comes back unchanged as a string value.
    #[test]
    fn quoted_content_is_preserved(content in "[^\"]{0,40}", tail in "[,\\] ]{0,3}") {
        let text = format!("\"{content}\"{tail}");
        let (value, rest) = parse_json(&text).unwrap();
        prop_assert_eq!(value, JsonValue::String(content));
        prop_assert_eq!(rest, tail);
    }
}
