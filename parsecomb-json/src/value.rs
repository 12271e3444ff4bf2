//! Value types produced by the grammar.

use thiserror::Error;

/// A scalar JSON value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonValue {
    /// Quoted string: `"abc"`
    String(String),

    /// Integer: `123`, `-7`
    Integer(i64),

    /// Boolean: `true` or `false`
    Bool(bool),

    /// `null`
    Null,
}

impl JsonValue {
    /// Try to get as string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as integer.
    #[inline]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            JsonValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as boolean.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Check if this is `null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }
}

/// A bare word that is not one of the JSON keywords.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown keyword `{0}`")]
pub struct UnknownKeyword(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(JsonValue::String("a".into()).as_str(), Some("a"));
        assert_eq!(JsonValue::Integer(7).as_integer(), Some(7));
        assert_eq!(JsonValue::Bool(false).as_bool(), Some(false));
        assert!(JsonValue::Null.is_null());
        assert_eq!(JsonValue::Null.as_str(), None);
        assert_eq!(JsonValue::String("7".into()).as_integer(), None);
    }

    #[test]
    fn test_unknown_keyword_display() {
        assert_eq!(UnknownKeyword("nil".into()).to_string(), "unknown keyword `nil`");
    }
}
