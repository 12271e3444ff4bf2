//! The JSON scalar grammar.
//!
//! ```text
//! value   = string | keyword | number
//! string  = '"' { any char except '"' } '"'
//! keyword = identifier, one of: true false null
//! number  = [ '-' ] digit { digit }
//! ```
//!
//! Alternatives are tried in that order, each from the same start. When all
//! of them fail the `number` failure is the one reported, so an integer that
//! overflows `i64` surfaces as a mapping failure past its digits.

use parsecomb_core::{
    alt, delimited, digit1, eof, ident, opt, pair, parse_str, rune, satisfy, take_while0, terminated, Parser,
    PositionedError,
};
use phf::phf_map;

use crate::value::{JsonValue, UnknownKeyword};

#[derive(Debug, Clone, Copy)]
enum Keyword {
    True,
    False,
    Null,
}

impl Keyword {
    fn value(self) -> JsonValue {
        match self {
            Keyword::True => JsonValue::Bool(true),
            Keyword::False => JsonValue::Bool(false),
            Keyword::Null => JsonValue::Null,
        }
    }
}

/// Bare words that denote values. Case sensitive.
static KEYWORDS: phf::Map<&'static str, Keyword> = phf_map! {
    "true" => Keyword::True,
    "false" => Keyword::False,
    "null" => Keyword::Null,
};

/// A quoted string. Escapes are not interpreted.
pub fn string_value() -> impl Parser<char, Output = JsonValue> {
    delimited(rune('"'), take_while0(satisfy(|c: &char| *c != '"')), rune('"'))
        .map(|content: Vec<char>| JsonValue::String(content.into_iter().collect()))
}

/// A decimal integer with an optional leading `-`.
///
/// Digits that overflow `i64` are consumed and reported as a mapping failure.
pub fn number_value() -> impl Parser<char, Output = JsonValue> {
    pair(opt(rune('-')), digit1()).try_map(|(sign, digits): (Option<char>, String)| {
        let text = match sign {
            Some(_) => format!("-{digits}"),
            None => digits,
        };
        text.parse::<i64>().map(JsonValue::Integer)
    })
}

/// `true`, `false`, or `null`.
pub fn keyword_value() -> impl Parser<char, Output = JsonValue> {
    ident().try_map(|name: String| {
        KEYWORDS
            .get(name.as_str())
            .map(|keyword| keyword.value())
            .ok_or(UnknownKeyword(name))
    })
}

/// Any scalar value.
pub fn json_value() -> impl Parser<char, Output = JsonValue> {
    alt((string_value(), keyword_value(), number_value()))
}

/// Parse one value from the start of `text`, returning it with the
/// unparsed remainder.
pub fn parse_json(text: &str) -> Result<(JsonValue, String), PositionedError<char>> {
    parse_str(&json_value(), text)
}

/// Parse `text` as exactly one value with nothing after it.
pub fn parse_document(text: &str) -> Result<JsonValue, PositionedError<char>> {
    parse_str(&terminated(json_value(), eof()), text).map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parsecomb_core::ParseError;

    #[test]
    fn test_string_value() {
        let (value, rest) = parse_json("\"abc\"").unwrap();
        assert_eq!(value, JsonValue::String("abc".into()));
        assert_eq!(rest, "");
    }

    #[test]
    fn test_empty_string_value() {
        let (value, rest) = parse_json("\"\",").unwrap();
        assert_eq!(value, JsonValue::String(String::new()));
        assert_eq!(rest, ",");
    }

    #[test]
    fn test_integer_value() {
        assert_eq!(parse_json("123").unwrap(), (JsonValue::Integer(123), String::new()));
        assert_eq!(parse_json("-7]").unwrap(), (JsonValue::Integer(-7), "]".to_string()));
    }

    #[test]
    fn test_keyword_values() {
        assert_eq!(parse_json("true").unwrap().0, JsonValue::Bool(true));
        assert_eq!(parse_json("false,").unwrap().0, JsonValue::Bool(false));
        assert_eq!(parse_json("null").unwrap().0, JsonValue::Null);
    }

    #[test]
    fn test_unknown_keyword() {
        let data: Vec<char> = "nil".chars().collect();
        let failure = parsecomb_core::parse_slice(&keyword_value(), &data).unwrap_err();
        assert!(matches!(failure.error, ParseError::Map { .. }));
        assert_eq!(failure.offset(), 3);
        assert_eq!(
            failure.error.to_string(),
            "failed to map parser output: unknown keyword `nil`"
        );

        // Through the value grammar the number branch reports last
        let err = parse_json("nil").unwrap_err();
        assert!(matches!(
            err.error,
            ParseError::NotSatisfiedCount { expected: 1, actual: 0 }
        ));
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn test_integer_overflow_reports_mapping_failure() {
        let err = parse_json("99999999999999999999").unwrap_err();
        assert!(matches!(err.error, ParseError::Map { .. }));
        assert_eq!(err.offset, 20);
    }

    #[test]
    fn test_empty_input() {
        let err = parse_json("").unwrap_err();
        assert!(err.error.is_no_left_input());
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn test_parse_document_rejects_trailing_input() {
        assert_eq!(parse_document("42").unwrap(), JsonValue::Integer(42));
        let err = parse_document("42x").unwrap_err();
        assert!(matches!(err.error, ParseError::Unsatisfied { actual: 'x' }));
        assert_eq!(err.offset, 2);
    }
}
