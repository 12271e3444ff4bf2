//! Primitive parsers: the only parsers that look at raw elements.
//!
//! Every primitive consumes nothing when it fails. On empty input they fail
//! with [`ParseError::NoLeftInputToParse`] (except [`eof`], which exists to
//! succeed there).

use std::marker::PhantomData;

use unicode_xid::UnicodeXID;

use crate::combinator::take_while1;
use crate::error::ParseError;
use crate::input::ParseInput;
use crate::parser::{ParseResult, Parser};

/// Elements that can be classified as characters.
///
/// Supplies the digit classification used by [`digit1`] and the identifier
/// classification used by [`ident`].
pub trait AsChar {
    fn as_char(&self) -> char;

    /// ASCII decimal digit `0`-`9`.
    #[inline]
    fn is_dec_digit(&self) -> bool {
        self.as_char().is_ascii_digit()
    }
}

impl AsChar for char {
    #[inline]
    fn as_char(&self) -> char {
        *self
    }
}

impl AsChar for u8 {
    #[inline]
    fn as_char(&self) -> char {
        char::from(*self)
    }
}

// ============================================================================
// Satisfy
// ============================================================================

/// Consume one element matching a predicate. See [`satisfy`].
#[derive(Debug, Clone, Copy)]
pub struct Satisfy<F> {
    predicate: F,
}

/// Consume exactly one element if `predicate` holds for it.
///
/// The output is the element itself. A mismatch fails with
/// [`ParseError::Unsatisfied`] and leaves the input where it was.
pub fn satisfy<E, F>(predicate: F) -> Satisfy<F>
where
    F: Fn(&E) -> bool,
{
    Satisfy { predicate }
}

impl<E, F> Parser<E> for Satisfy<F>
where
    E: Clone,
    F: Fn(&E) -> bool,
{
    type Output = E;

    fn parse<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, E> {
        match input.split_first() {
            None => Err(ParseError::NoLeftInputToParse.at(input)),
            Some((head, rest)) if (self.predicate)(head) => Ok((rest, head.clone())),
            Some((head, _)) => Err(ParseError::Unsatisfied { actual: head.clone() }.at(input)),
        }
    }
}

// ============================================================================
// Literal elements
// ============================================================================

/// Consume one element equal to an expected value. See [`literal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<E> {
    expected: E,
}

/// Consume one element equal to `expected`.
///
/// A specialized [`satisfy`]: the mismatch error is
/// [`ParseError::UnexpectedRune`], carrying both the expected and the
/// actual element.
pub fn literal<E>(expected: E) -> Literal<E>
where
    E: Clone + PartialEq,
{
    Literal { expected }
}

/// [`literal`] under its character-input name.
#[inline]
pub fn rune<E>(expected: E) -> Literal<E>
where
    E: Clone + PartialEq,
{
    literal(expected)
}

impl<E> Parser<E> for Literal<E>
where
    E: Clone + PartialEq,
{
    type Output = E;

    fn parse<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, E> {
        satisfy(|e: &E| *e == self.expected)
            .parse(input)
            .map_err(|failure| match failure.error {
                ParseError::Unsatisfied { actual } => ParseError::UnexpectedRune {
                    expected: self.expected.clone(),
                    actual,
                }
                .at(failure.rest),
                _ => failure,
            })
    }
}

/// Consume one element, whatever it is. See [`any`].
#[derive(Debug, Clone, Copy)]
pub struct Any<E> {
    _element: PhantomData<fn() -> E>,
}

/// Consume exactly one element. Fails only on empty input.
pub fn any<E>() -> Any<E> {
    Any { _element: PhantomData }
}

impl<E: Clone> Parser<E> for Any<E> {
    type Output = E;

    fn parse<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, E> {
        satisfy(|_: &E| true).parse(input)
    }
}

/// Consume a fixed run of elements. See [`tag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<E> {
    expected: Vec<E>,
}

/// Consume exactly the elements of `expected`, in order.
///
/// All or nothing: on a mismatch or early end of input nothing is consumed.
pub fn tag<E>(expected: &[E]) -> Tag<E>
where
    E: Clone + PartialEq,
{
    Tag {
        expected: expected.to_vec(),
    }
}

impl<E> Parser<E> for Tag<E>
where
    E: Clone + PartialEq,
{
    type Output = Vec<E>;

    fn parse<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, Vec<E>> {
        let mut rest = input;
        for expected in &self.expected {
            match literal(expected.clone()).parse(rest) {
                Ok((next, _)) => rest = next,
                // Report the mismatch at the start; a tag is all or nothing
                Err(failure) => return Err(failure.error.at(input)),
            }
        }
        Ok((rest, self.expected.clone()))
    }
}

/// Succeed only at end of input. See [`eof`].
#[derive(Debug, Clone, Copy)]
pub struct Eof<E> {
    _element: PhantomData<fn() -> E>,
}

/// Succeed, consuming nothing, only when no input is left.
pub fn eof<E>() -> Eof<E> {
    Eof { _element: PhantomData }
}

impl<E: Clone> Parser<E> for Eof<E> {
    type Output = ();

    fn parse<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, ()> {
        match input.first() {
            None => Ok((input, ())),
            Some(head) => Err(ParseError::Unsatisfied { actual: head.clone() }.at(input)),
        }
    }
}

// ============================================================================
// Character classes
// ============================================================================

/// One or more decimal digits, as a string. See [`digit1`].
#[derive(Debug, Clone, Copy)]
pub struct Digit1<E> {
    _element: PhantomData<fn() -> E>,
}

/// Consume the longest non-empty run of decimal digits.
///
/// The output is the run rendered as a `String`. This is
/// `take_while1(satisfy(is_digit))` with the matched elements collected into
/// text, so it fails the same way: [`ParseError::NoLeftInputToParse`] on
/// empty input, [`ParseError::NotSatisfiedCount`] if the first element is
/// not a digit.
pub fn digit1<E>() -> Digit1<E>
where
    E: AsChar + Clone,
{
    Digit1 { _element: PhantomData }
}

impl<E> Parser<E> for Digit1<E>
where
    E: AsChar + Clone,
{
    type Output = String;

    fn parse<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, String> {
        let (rest, digits) = take_while1(satisfy(|e: &E| e.is_dec_digit())).parse(input)?;
        Ok((rest, digits.iter().map(AsChar::as_char).collect()))
    }
}

/// A Unicode identifier. See [`ident`].
#[derive(Debug, Clone, Copy)]
pub struct Ident<E> {
    _element: PhantomData<fn() -> E>,
}

/// Consume an identifier: an XID-start character or `_`, followed by any
/// number of XID-continue characters.
pub fn ident<E>() -> Ident<E>
where
    E: AsChar + Clone,
{
    Ident { _element: PhantomData }
}

impl<E> Parser<E> for Ident<E>
where
    E: AsChar + Clone,
{
    type Output = String;

    fn parse<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, String> {
        let (mut rest, head) = satisfy(|e: &E| {
            let c = e.as_char();
            c == '_' || UnicodeXID::is_xid_start(c)
        })
        .parse(input)?;

        let mut name = String::new();
        name.push(head.as_char());
        while let Some((next, tail)) = rest.split_first() {
            let c = next.as_char();
            if !UnicodeXID::is_xid_continue(c) {
                break;
            }
            name.push(c);
            rest = tail;
        }
        Ok((rest, name))
    }
}
