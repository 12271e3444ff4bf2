//! The parser contract.
//!
//! Every primitive and combinator implements [`Parser`]. A parser takes a
//! view of the input and either returns the remaining suffix together with
//! its output, or a [`Failure`] describing what went wrong and how far it got.
//!
//! Parsers are plain values. Building one executes nothing; the same parser
//! can be run against any number of inputs.

use std::marker::PhantomData;
use std::rc::Rc;

use crate::combinator::{Map, TryMap};
use crate::error::{BoxError, Failure, PositionedError};
use crate::input::ParseInput;

/// Result of running a parser: `(remaining, output)` or a failure.
pub type ParseResult<'a, E, O> = Result<(ParseInput<'a, E>, O), Failure<'a, E>>;

/// A parser over elements of type `E`.
pub trait Parser<E> {
    /// Value produced on success.
    type Output;

    /// Run the parser against `input`.
    ///
    /// On success the returned input is a suffix of `input`. On failure the
    /// failure's `rest` never lies beyond what was consumed before the
    /// mismatch was detected.
    fn parse<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, Self::Output>;

    /// Transform the output with an infallible function.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, f)
    }

    /// Transform the output with a function that may fail.
    ///
    /// A mapping failure keeps the input this parser already consumed.
    fn try_map<U, X, F>(self, f: F) -> TryMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Result<U, X>,
        X: Into<BoxError>,
    {
        TryMap::new(self, f)
    }

    /// Erase the concrete type behind a shared handle.
    fn boxed<'p>(self) -> BoxedParser<'p, E, Self::Output>
    where
        Self: Sized + 'p,
    {
        BoxedParser::new(self)
    }
}

// ============================================================================
// Type erasure
// ============================================================================

/// A type-erased, cheaply clonable parser.
///
/// Useful for naming parser types in signatures and for grammars whose
/// rules refer to one another.
pub struct BoxedParser<'p, E, O> {
    inner: Rc<dyn Parser<E, Output = O> + 'p>,
}

impl<'p, E, O> BoxedParser<'p, E, O> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<E, Output = O> + 'p,
    {
        Self { inner: Rc::new(parser) }
    }
}

impl<E, O> Clone for BoxedParser<'_, E, O> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E, O> Parser<E> for BoxedParser<'_, E, O> {
    type Output = O;

    #[inline]
    fn parse<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, O> {
        self.inner.parse(input)
    }
}

impl<E, O> std::fmt::Debug for BoxedParser<'_, E, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BoxedParser")
    }
}

// ============================================================================
// Functions as parsers
// ============================================================================

/// Parser backed by a plain function or closure. See [`from_fn`].
pub struct FromFn<F, O> {
    f: F,
    _output: PhantomData<fn() -> O>,
}

/// Wrap a function as a parser.
///
/// ```
/// use parsecomb_core::{from_fn, rune, ParseInput, ParseResult, Parser};
///
/// fn quote<'a>(input: ParseInput<'a, char>) -> ParseResult<'a, char, char> {
///     rune('"').parse(input)
/// }
///
/// let data: Vec<char> = "\"x".chars().collect();
/// let (rest, out) = from_fn(quote).parse(ParseInput::from(&data)).unwrap();
/// assert_eq!(out, '"');
/// assert_eq!(rest.as_slice(), &['x']);
/// ```
pub fn from_fn<E, O, F>(f: F) -> FromFn<F, O>
where
    F: for<'a> Fn(ParseInput<'a, E>) -> ParseResult<'a, E, O>,
{
    FromFn {
        f,
        _output: PhantomData,
    }
}

impl<E, O, F> Parser<E> for FromFn<F, O>
where
    F: for<'a> Fn(ParseInput<'a, E>) -> ParseResult<'a, E, O>,
{
    type Output = O;

    #[inline]
    fn parse<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, O> {
        (self.f)(input)
    }
}

impl<F, O> Clone for FromFn<F, O>
where
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _output: PhantomData,
        }
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Run `parser` over a whole slice.
pub fn parse_slice<'a, E, P>(parser: &P, elements: &'a [E]) -> ParseResult<'a, E, P::Output>
where
    P: Parser<E>,
{
    parser.parse(ParseInput::new(elements))
}

/// Run a character parser over text.
///
/// Returns the output and the unparsed remainder of `text`.
pub fn parse_str<P>(parser: &P, text: &str) -> Result<(P::Output, String), PositionedError<char>>
where
    P: Parser<char>,
{
    let chars: Vec<char> = text.chars().collect();
    match parser.parse(ParseInput::new(&chars)) {
        Ok((rest, output)) => Ok((output, rest.as_slice().iter().collect())),
        Err(failure) => Err(failure.detach()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::primitive::{digit1, rune};

    fn quoted_x<'a>(input: ParseInput<'a, char>) -> ParseResult<'a, char, char> {
        let (rest, _) = rune('"').parse(input)?;
        let (rest, x) = rune('x').parse(rest)?;
        let (rest, _) = rune('"').parse(rest)?;
        Ok((rest, x))
    }

    #[test]
    fn test_fn_item_as_parser() {
        let data: Vec<char> = "\"x\"!".chars().collect();
        let (rest, out) = from_fn(quoted_x).parse(ParseInput::from(&data)).unwrap();
        assert_eq!(out, 'x');
        assert_eq!(rest.as_slice(), &['!']);
    }

    #[test]
    fn test_closure_as_parser() {
        let twice = from_fn(|input: ParseInput<'_, u8>| {
            let (rest, a) = rune(b'a').parse(input)?;
            let (rest, b) = rune(b'a').parse(rest)?;
            Ok((rest, [a, b]))
        });
        let (rest, out) = parse_slice(&twice, b"aab").unwrap();
        assert_eq!(out, [b'a', b'a']);
        assert_eq!(rest.as_slice(), b"b");
    }

    #[test]
    fn test_boxed_parser_is_shared() {
        let digits = digit1().boxed();
        let again = digits.clone();
        let (rest, out) = parse_slice(&again, b"12x").unwrap();
        assert_eq!(out, "12");
        assert_eq!(rest.as_slice(), b"x");
        assert!(parse_slice(&digits, b"x").is_err());
    }

    #[test]
    fn test_parse_str_returns_remainder() {
        let (out, rest) = parse_str(&digit1(), "42,").unwrap();
        assert_eq!(out, "42");
        assert_eq!(rest, ",");
    }

    #[test]
    fn test_parse_str_reports_offset() {
        let err = parse_str(&from_fn(quoted_x), "\"y\"").unwrap_err();
        assert_eq!(err.offset, 1);
        assert!(matches!(
            err.error,
            ParseError::UnexpectedRune { expected: 'x', actual: 'y' }
        ));
    }
}
