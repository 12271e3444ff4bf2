//! Parse failures.
//!
//! Failures are ordinary values. Every combinator receives its sub-parser's
//! [`Failure`] and decides on the spot whether to retry, stop a loop, or
//! hand it upward.

use thiserror::Error;

use crate::input::ParseInput;

/// Boxed error returned by fallible output mappings.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a parser failed.
#[derive(Debug, Error)]
pub enum ParseError<E> {
    /// A match was requested against input that is already exhausted.
    #[error("no input left to parse")]
    NoLeftInputToParse,

    /// The head element did not satisfy the predicate.
    #[error("unexpected element {actual:?}")]
    Unsatisfied { actual: E },

    /// The head element was not the expected literal.
    #[error("expected {expected:?} but got {actual:?}")]
    UnexpectedRune { expected: E, actual: E },

    /// A repetition succeeded fewer times than its configured minimum.
    #[error("not satisfied '{expected}' sub-parser succeeds (got {actual})")]
    NotSatisfiedCount { expected: usize, actual: usize },

    /// The sub-parser matched but converting its output failed.
    #[error("failed to map parser output: {source}")]
    Map {
        #[source]
        source: BoxError,
    },
}

impl<E> ParseError<E> {
    /// Check if this is a [`ParseError::NoLeftInputToParse`].
    #[inline]
    pub fn is_no_left_input(&self) -> bool {
        matches!(self, ParseError::NoLeftInputToParse)
    }

    /// Attach the position reached when this error was detected.
    #[inline]
    pub fn at(self, rest: ParseInput<'_, E>) -> Failure<'_, E> {
        Failure { rest, error: self }
    }
}

/// A failed parse: the error plus how far the parser had got.
///
/// `rest` never lies beyond what the failing parser actually consumed.
/// Primitives leave it at their starting input; sequencing and repetition
/// combinators may report a partially advanced position.
#[derive(Debug, Error)]
#[error("{error} at offset {offset}", offset = .rest.offset())]
pub struct Failure<'a, E> {
    pub rest: ParseInput<'a, E>,
    pub error: ParseError<E>,
}

impl<'a, E> Failure<'a, E> {
    pub fn new(rest: ParseInput<'a, E>, error: ParseError<E>) -> Self {
        Self { rest, error }
    }

    /// Absolute position at which the failure was detected.
    #[inline]
    pub fn offset(&self) -> usize {
        self.rest.offset()
    }

    /// Drop the position, keeping only the error.
    #[inline]
    pub fn into_error(self) -> ParseError<E> {
        self.error
    }

    /// Release the borrow on the input, keeping the offset.
    pub fn detach(self) -> PositionedError<E> {
        PositionedError {
            offset: self.rest.offset(),
            error: self.error,
        }
    }
}

/// A [`Failure`] that no longer borrows the input it was parsing.
#[derive(Debug, Error)]
#[error("{error} at offset {offset}")]
pub struct PositionedError<E> {
    pub offset: usize,
    pub error: ParseError<E>,
}
