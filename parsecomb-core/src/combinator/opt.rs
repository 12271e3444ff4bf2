//! Zero-or-one.

use crate::input::ParseInput;
use crate::parser::{ParseResult, Parser};

/// Optional parser. See [`opt`].
#[derive(Debug, Clone, Copy)]
pub struct Opt<P> {
    parser: P,
}

/// Try `parser`; on failure produce `None` at the original position.
///
/// Never fails. Like [`alt`](crate::alt), a failed attempt leaves nothing
/// behind.
pub fn opt<P>(parser: P) -> Opt<P> {
    Opt { parser }
}

impl<E, P> Parser<E> for Opt<P>
where
    P: Parser<E>,
{
    type Output = Option<P::Output>;

    fn parse<'a>(&self, input: ParseInput<'a, E>) -> ParseResult<'a, E, Self::Output> {
        match self.parser.parse(input) {
            Ok((rest, output)) => Ok((rest, Some(output))),
            Err(_) => Ok((input, None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::pair;
    use crate::parser::parse_slice;
    use crate::primitive::{digit1, rune};

    #[test]
    fn test_opt_present() {
        let (rest, (sign, digits)) = parse_slice(&pair(opt(rune(b'-')), digit1()), b"-12").unwrap();
        assert_eq!(sign, Some(b'-'));
        assert_eq!(digits, "12");
        assert!(rest.is_empty());
    }

    #[test]
    fn test_opt_absent_keeps_position() {
        let (rest, sign) = parse_slice(&opt(rune(b'-')), b"12").unwrap();
        assert_eq!(sign, None);
        assert_eq!(rest.offset(), 0);

        let (rest, sign) = parse_slice(&opt(rune(b'-')), b"").unwrap();
        assert_eq!(sign, None);
        assert!(rest.is_empty());
    }
}
