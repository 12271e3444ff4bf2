//! Parser Combinator Core
//!
//! Recursive-descent parsers over any sequence of elements (characters,
//! bytes, tokens), assembled from small composable pieces.
//!
//! # Architecture
//!
//! - **input.rs** - `ParseInput`, an immutable suffix view over borrowed elements
//! - **parser.rs** - The `Parser` contract, type erasure, entry points
//! - **error.rs** - `ParseError` kinds and positioned `Failure`s
//! - **primitive.rs** - Parsers that consume raw elements (`satisfy`, `rune`, `digit1`, ...)
//! - **combinator/** - Parsers built from parsers (`map`, `alt`, `delimited`, `take_while*`, ...)
//!
//! # Example
//!
//! ```
//! use parsecomb_core::{alt, delimited, parse_str, rune, satisfy, take_while0, digit1, Parser};
//!
//! #[derive(Debug, PartialEq)]
//! enum Scalar {
//!     Text(String),
//!     Number(String),
//! }
//!
//! let text = delimited(rune('"'), take_while0(satisfy(|c: &char| *c != '"')), rune('"'))
//!     .map(|chars: Vec<char>| Scalar::Text(chars.into_iter().collect()));
//! let number = digit1().map(Scalar::Number);
//! let scalar = alt((text, number));
//!
//! let (value, rest) = parse_str(&scalar, "\"hi\" tail").unwrap();
//! assert_eq!(value, Scalar::Text("hi".into()));
//! assert_eq!(rest, " tail");
//! ```

pub mod combinator;
pub mod error;
pub mod input;
pub mod parser;
pub mod primitive;

pub use combinator::{
    alt, delimited, map, opt, pair, preceded, take_while0, take_while1, take_while_m, terminated, try_map, EmptyInput,
};
pub use error::{BoxError, Failure, ParseError, PositionedError};
pub use input::ParseInput;
pub use parser::{from_fn, parse_slice, parse_str, BoxedParser, ParseResult, Parser};
pub use primitive::{any, digit1, eof, ident, literal, rune, satisfy, tag, AsChar};
