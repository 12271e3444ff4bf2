//! JSON Scalar Values
//!
//! A small JSON-value grammar assembled entirely from `parsecomb-core`
//! combinators. It covers quoted strings (without escapes), integers, and
//! the `true`/`false`/`null` keywords.
//!
//! # Architecture
//!
//! - **value.rs** - `JsonValue` and conversion errors
//! - **grammar.rs** - The parsers, one per value kind, and the entry points
//!
//! # Example
//!
//! ```
//! use parsecomb_json::{parse_json, JsonValue};
//!
//! let (value, rest) = parse_json("\"abc\", 1").unwrap();
//! assert_eq!(value, JsonValue::String("abc".into()));
//! assert_eq!(rest, ", 1");
//! ```

pub mod grammar;
pub mod value;

pub use grammar::{json_value, keyword_value, number_value, parse_document, parse_json, string_value};
pub use value::{JsonValue, UnknownKeyword};
