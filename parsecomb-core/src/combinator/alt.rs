//! Ordered choice.

use tracing::trace;

use crate::input::ParseInput;
use crate::parser::{ParseResult, Parser};

/// A fixed, ordered set of alternatives producing the same output.
///
/// Implemented for tuples of 2 to 8 parsers.
pub trait Choice<E> {
    type Output;

    /// Try each alternative in order against `input`, returning the first
    /// success or, if all fail, the last alternative's failure.
    fn choose<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, Self::Output>;
}

/// Ordered choice over a tuple of parsers. See [`alt`].
#[derive(Debug, Clone, Copy)]
pub struct Alt<C> {
    choices: C,
}

/// Try `choices` in order, each against the same untouched input.
///
/// The first success wins. A failed branch leaves nothing behind: the next
/// branch starts from the original position, not from wherever the failed
/// branch stopped. If every branch fails, the failure of the last one is
/// returned as is.
///
/// ```
/// use parsecomb_core::{alt, parse_slice, rune};
///
/// let sign = alt((rune(b'+'), rune(b'-')));
/// let (rest, out) = parse_slice(&sign, b"-1").unwrap();
/// assert_eq!(out, b'-');
/// assert_eq!(rest.as_slice(), b"1");
/// ```
pub fn alt<C>(choices: C) -> Alt<C> {
    Alt { choices }
}

impl<E, C> Parser<E> for Alt<C>
where
    C: Choice<E>,
{
    type Output = C::Output;

    #[inline]
    fn parse<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, C::Output> {
        self.choices.choose(input)
    }
}

macro_rules! choice_tuple {
    ($($idx:tt $p:ident),+ => $last_idx:tt $last:ident) => {
        impl<E, $($p,)+ $last> Choice<E> for ($($p,)+ $last)
        where
            $($p: Parser<E, Output = <$last as Parser<E>>::Output>,)+
            $last: Parser<E>,
        {
            type Output = <$last as Parser<E>>::Output;

            fn choose<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, Self::Output> {
                $(
                    match self.$idx.parse(input) {
                        Ok(done) => return Ok(done),
                        Err(failure) => {
                            trace!(alternative = $idx, reached = failure.offset(), "alternative rejected, restarting");
                        }
                    }
                )+
                let last = self.$last_idx.parse(input);
                if let Err(failure) = &last {
                    trace!(alternatives = $last_idx + 1, reached = failure.offset(), "all alternatives rejected");
                }
                last
            }
        }
    };
}

choice_tuple!(0 P0 => 1 P1);
choice_tuple!(0 P0, 1 P1 => 2 P2);
choice_tuple!(0 P0, 1 P1, 2 P2 => 3 P3);
choice_tuple!(0 P0, 1 P1, 2 P2, 3 P3 => 4 P4);
choice_tuple!(0 P0, 1 P1, 2 P2, 3 P3, 4 P4 => 5 P5);
choice_tuple!(0 P0, 1 P1, 2 P2, 3 P3, 4 P4, 5 P5 => 6 P6);
choice_tuple!(0 P0, 1 P1, 2 P2, 3 P3, 4 P4, 5 P5, 6 P6 => 7 P7);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::delimited;
    use crate::error::ParseError;
    use crate::parser::parse_slice;
    use crate::primitive::{digit1, rune, tag};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_first_success_wins() {
        let data = chars("ab");
        let p = alt((rune('a'), rune('a').map(|_: char| 'z')));
        let (rest, out) = parse_slice(&p, &data).unwrap();
        assert_eq!(out, 'a');
        assert_eq!(rest.as_slice(), &['b']);
    }

    #[test]
    fn test_restarts_from_original_input() {
        // The first branch consumes "(1" before failing on the missing ')'
        let data = chars("(1]");
        let p = alt((
            delimited(rune('('), digit1(), rune(')')),
            delimited(rune('('), digit1(), rune(']')),
        ));
        let (rest, out) = parse_slice(&p, &data).unwrap();
        assert_eq!(out, "1");
        assert!(rest.is_empty());
    }

    #[test]
    fn test_all_fail_returns_last_failure() {
        let data = chars("x");
        let p = alt((rune('a'), rune('b'), rune('c')));
        let failure = parse_slice(&p, &data).unwrap_err();
        assert!(matches!(
            failure.error,
            ParseError::UnexpectedRune { expected: 'c', actual: 'x' }
        ));
        assert_eq!(failure.offset(), 0);
    }

    #[test]
    fn test_last_failure_keeps_its_position() {
        let data = chars("nul");
        let p = alt((
            tag(&chars("true")),
            delimited(rune('n'), rune('u'), rune('x')).map(|c: char| vec![c]),
        ));
        let failure = parse_slice(&p, &data).unwrap_err();
        assert!(matches!(
            failure.error,
            ParseError::UnexpectedRune { expected: 'x', actual: 'l' }
        ));
        assert_eq!(failure.offset(), 2);
    }

    #[test]
    fn test_eight_alternatives() {
        let p = alt((
            rune(b'0'),
            rune(b'1'),
            rune(b'2'),
            rune(b'3'),
            rune(b'4'),
            rune(b'5'),
            rune(b'6'),
            rune(b'7'),
        ));
        let (_, out) = parse_slice(&p, b"7").unwrap();
        assert_eq!(out, b'7');
        assert!(parse_slice(&p, b"8").is_err());
    }
}
