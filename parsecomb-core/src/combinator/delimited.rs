//! Sequencing.
//!
//! Each stage runs on the input the previous stage left behind. The first
//! failing stage ends the sequence and its failure is returned unchanged, so
//! the reported position includes everything the earlier stages consumed.
//! There is no retry across stage boundaries.

use crate::input::ParseInput;
use crate::parser::{ParseResult, Parser};

/// Prefix, content, suffix; keeps the content. See [`delimited`].
#[derive(Debug, Clone, Copy)]
pub struct Delimited<A, B, C> {
    open: A,
    content: B,
    close: C,
}

/// Parse `open`, then `content`, then `close`, keeping only `content`'s output.
///
/// ```
/// use parsecomb_core::{delimited, parse_slice, rune, satisfy, take_while0};
///
/// let quoted = delimited(rune('"'), take_while0(satisfy(|c: &char| *c != '"')), rune('"'));
/// let data: Vec<char> = "\"hello\"rest".chars().collect();
/// let (rest, out) = parse_slice(&quoted, &data).unwrap();
/// assert_eq!(out.into_iter().collect::<String>(), "hello");
/// assert_eq!(rest.as_slice().iter().collect::<String>(), "rest");
/// ```
pub fn delimited<A, B, C>(open: A, content: B, close: C) -> Delimited<A, B, C> {
    Delimited { open, content, close }
}

impl<E, A, B, C> Parser<E> for Delimited<A, B, C>
where
    A: Parser<E>,
    B: Parser<E>,
    C: Parser<E>,
{
    type Output = B::Output;

    fn parse<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, B::Output> {
        let (rest, _) = self.open.parse(input)?;
        let (rest, output) = self.content.parse(rest)?;
        let (rest, _) = self.close.parse(rest)?;
        Ok((rest, output))
    }
}

/// Two parsers in sequence, keeping both outputs. See [`pair`].
#[derive(Debug, Clone, Copy)]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

/// Parse `first` then `second`, producing both outputs.
pub fn pair<A, B>(first: A, second: B) -> Pair<A, B> {
    Pair { first, second }
}

impl<E, A, B> Parser<E> for Pair<A, B>
where
    A: Parser<E>,
    B: Parser<E>,
{
    type Output = (A::Output, B::Output);

    fn parse<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, Self::Output> {
        let (rest, a) = self.first.parse(input)?;
        let (rest, b) = self.second.parse(rest)?;
        Ok((rest, (a, b)))
    }
}

/// Discard a prefix. See [`preceded`].
#[derive(Debug, Clone, Copy)]
pub struct Preceded<A, B> {
    prefix: A,
    parser: B,
}

/// Parse `prefix` then `parser`, keeping only `parser`'s output.
pub fn preceded<A, B>(prefix: A, parser: B) -> Preceded<A, B> {
    Preceded { prefix, parser }
}

impl<E, A, B> Parser<E> for Preceded<A, B>
where
    A: Parser<E>,
    B: Parser<E>,
{
    type Output = B::Output;

    fn parse<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, B::Output> {
        let (rest, _) = self.prefix.parse(input)?;
        self.parser.parse(rest)
    }
}

/// Discard a suffix. See [`terminated`].
#[derive(Debug, Clone, Copy)]
pub struct Terminated<A, B> {
    parser: A,
    suffix: B,
}

/// Parse `parser` then `suffix`, keeping only `parser`'s output.
pub fn terminated<A, B>(parser: A, suffix: B) -> Terminated<A, B> {
    Terminated { parser, suffix }
}

impl<E, A, B> Parser<E> for Terminated<A, B>
where
    A: Parser<E>,
    B: Parser<E>,
{
    type Output = A::Output;

    fn parse<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, A::Output> {
        let (rest, output) = self.parser.parse(input)?;
        let (rest, _) = self.suffix.parse(rest)?;
        Ok((rest, output))
    }
}
