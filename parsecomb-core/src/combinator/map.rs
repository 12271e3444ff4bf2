//! Output mapping.

use tracing::debug;

use crate::error::{BoxError, ParseError};
use crate::input::ParseInput;
use crate::parser::{ParseResult, Parser};

/// Infallible output mapping. See [`map`].
#[derive(Debug, Clone, Copy)]
pub struct Map<P, F> {
    parser: P,
    f: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, f: F) -> Self {
        Self { parser, f }
    }
}

/// Parse exactly as `parser` does, then apply `f` to the output.
pub fn map<E, P, F, U>(parser: P, f: F) -> Map<P, F>
where
    P: Parser<E>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, f)
}

impl<E, P, F, U> Parser<E> for Map<P, F>
where
    P: Parser<E>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    #[inline]
    fn parse<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, U> {
        let (rest, output) = self.parser.parse(input)?;
        Ok((rest, (self.f)(output)))
    }
}

/// Fallible output mapping. See [`try_map`].
#[derive(Debug, Clone, Copy)]
pub struct TryMap<P, F> {
    parser: P,
    f: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, f: F) -> Self {
        Self { parser, f }
    }
}

/// Parse exactly as `parser` does, then convert the output with `f`.
///
/// If `parser` fails, its failure is returned unchanged. If `f` fails, the
/// result is [`ParseError::Map`] positioned after what `parser` consumed:
/// a conversion failure does not give input back.
pub fn try_map<E, P, F, U, X>(parser: P, f: F) -> TryMap<P, F>
where
    P: Parser<E>,
    F: Fn(P::Output) -> Result<U, X>,
    X: Into<BoxError>,
{
    TryMap::new(parser, f)
}

impl<E, P, F, U, X> Parser<E> for TryMap<P, F>
where
    P: Parser<E>,
    F: Fn(P::Output) -> Result<U, X>,
    X: Into<BoxError>,
{
    type Output = U;

    fn parse<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, U> {
        let (rest, output) = self.parser.parse(input)?;
        match (self.f)(output) {
            Ok(mapped) => Ok((rest, mapped)),
            Err(err) => {
                let source = err.into();
                debug!(offset = rest.offset(), error = %source, "output mapping failed");
                Err(ParseError::Map { source }.at(rest))
            }
        }
    }
}
