//! Bounded repetition.

use tracing::trace;

use crate::error::ParseError;
use crate::input::ParseInput;
use crate::parser::{ParseResult, Parser};

/// What a repetition does when handed empty input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyInput {
    /// Fail with [`ParseError::NoLeftInputToParse`], even with a minimum of 0.
    #[default]
    Reject,
    /// Treat empty input as zero applications and check the minimum.
    Accept,
}

/// Repeated application of a sub-parser. See [`take_while_m`].
#[derive(Debug, Clone, Copy)]
pub struct TakeWhile<P> {
    sub: P,
    min: usize,
    empty_input: EmptyInput,
}

impl<P> TakeWhile<P> {
    pub fn new(sub: P, min: usize) -> Self {
        Self {
            sub,
            min,
            empty_input: EmptyInput::default(),
        }
    }

    /// Choose how empty input is handled. Defaults to [`EmptyInput::Reject`].
    pub fn on_empty_input(mut self, policy: EmptyInput) -> Self {
        self.empty_input = policy;
        self
    }

    /// Minimum number of successful applications.
    #[inline]
    pub fn min(&self) -> usize {
        self.min
    }
}

/// Apply `sub` as many times as it succeeds, zero or more.
///
/// Rejects empty input unless configured with
/// [`TakeWhile::on_empty_input`].
pub fn take_while0<P>(sub: P) -> TakeWhile<P> {
    TakeWhile::new(sub, 0)
}

/// Apply `sub` as many times as it succeeds, at least once.
pub fn take_while1<P>(sub: P) -> TakeWhile<P> {
    TakeWhile::new(sub, 1)
}

/// Apply `sub` as many times as it succeeds, at least `min` times.
///
/// The loop stops at the first failing attempt (which consumes nothing and
/// is not reported), at end of input, or after an application that consumed
/// nothing. Fewer than `min` successes fails with
/// [`ParseError::NotSatisfiedCount`] positioned where the loop stopped:
/// input already consumed is not given back. The outputs collected before
/// the shortfall are dropped; a [`Failure`](crate::Failure) carries only
/// the position and the error.
///
/// A success that consumed nothing still counts toward `min`. With a
/// sub-parser that can match empty, such as [`opt`](crate::opt),
/// `take_while1` can succeed without consuming anything.
pub fn take_while_m<P>(sub: P, min: usize) -> TakeWhile<P> {
    TakeWhile::new(sub, min)
}

impl<E, P> Parser<E> for TakeWhile<P>
where
    P: Parser<E>,
{
    type Output = Vec<P::Output>;

    fn parse<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, Self::Output> {
        if input.is_empty() && self.empty_input == EmptyInput::Reject {
            return Err(ParseError::NoLeftInputToParse.at(input));
        }

        let mut rest = input;
        let mut output = Vec::new();
        while !rest.is_empty() {
            match self.sub.parse(rest) {
                Ok((next, item)) => {
                    output.push(item);
                    if next.consumed_since(&rest) == 0 {
                        trace!(count = output.len(), "sub-parser consumed nothing, stopping");
                        break;
                    }
                    rest = next;
                }
                Err(failure) => {
                    trace!(count = output.len(), stopped_at = failure.offset(), "sub-parser stopped");
                    break;
                }
            }
        }

        if output.len() < self.min {
            return Err(ParseError::NotSatisfiedCount {
                expected: self.min,
                actual: output.len(),
            }
            .at(rest));
        }
        Ok((rest, output))
    }
}
