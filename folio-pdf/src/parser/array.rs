use nom::{IResult, Parser, bytes::complete::tag, multi::many0, sequence::delimited};

use crate::parser::{
    operation::{Operand, operand},
    whitespace::separator,
};

/// Parses an operand array such as the `[(A) 120 (W)]` of `TJ`.
pub fn array(input: &[u8]) -> IResult<&[u8], Vec<Operand>> {
    let items = many0(delimited(separator, operand, separator));

    delimited((tag("["), separator), items, tag("]")).parse(input)
}
