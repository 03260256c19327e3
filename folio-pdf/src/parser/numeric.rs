use nom::{
    IResult, ParseTo, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{digit0, digit1, one_of},
    combinator::{opt, recognize},
    error::{Error, ErrorKind},
    sequence::preceded,
};

use crate::types::Numeric;

/// Parses an integer or real number.
///
/// Accepts an optional sign and the forms `12`, `12.5`, `.5` and `12.`.
pub fn numeric(input: &[u8]) -> IResult<&[u8], Numeric> {
    let (remaining, number) = recognize(preceded(
        opt(one_of("+-")),
        alt((
            recognize((tag("."), digit1)),
            recognize((digit1, opt((tag("."), digit0)))),
        )),
    ))
    .parse(input)?;

    if number.contains(&b'.') {
        let value: f64 = number
            .parse_to()
            .ok_or_else(|| nom::Err::Error(Error::new(input, ErrorKind::Float)))?;
        Ok((remaining, Numeric::Real(value)))
    } else {
        let value: i64 = number
            .parse_to()
            .ok_or_else(|| nom::Err::Error(Error::new(input, ErrorKind::Digit)))?;
        Ok((remaining, Numeric::Integer(value)))
    }
}
