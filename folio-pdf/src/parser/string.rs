use nom::{
    AsChar, IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while, take_while_m_n, take_while1},
    combinator::value,
    multi::fold,
    number::complete as number,
    sequence::{delimited, preceded},
};

use crate::parser::whitespace::is_whitespace;

#[derive(Debug, Clone)]
enum Fragment<'a> {
    Literal(&'a [u8]),
    Escaped(u8),
    LineContinuation,
    Nested(String),
}

/// Parses a literal string `( ... )` into its text.
///
/// Escape sequences are decoded, balanced parentheses are kept, and a
/// backslash before a line break joins the two lines. A backslash before
/// any other character is dropped.
pub fn literal_string(input: &[u8]) -> IResult<&[u8], String> {
    let octal = take_while_m_n(1, 3, |c: u8| matches!(c, b'0'..=b'7')).map_res(|digits: &[u8]| {
        let code = digits
            .iter()
            .fold(0u16, |code, digit| code * 8 + u16::from(digit - b'0'));
        u8::try_from(code)
    });

    let escaped = preceded(
        tag("\\"),
        alt((
            value(Fragment::LineContinuation, alt((tag("\r\n"), tag("\r"), tag("\n")))),
            value(Fragment::Escaped(b'\n'), tag("n")),
            value(Fragment::Escaped(b'\r'), tag("r")),
            value(Fragment::Escaped(b'\t'), tag("t")),
            value(Fragment::Escaped(0x08), tag("b")),
            value(Fragment::Escaped(0x0C), tag("f")),
            octal.map(Fragment::Escaped),
            number::u8.map(Fragment::Escaped),
        )),
    );

    let literal = take_while1(|c: u8| !matches!(c, b'\\' | b'(' | b')')).map(Fragment::Literal);

    let content = alt((
        literal,
        escaped,
        literal_string.map(|inner| Fragment::Nested(format!("({inner})"))),
    ));

    let text = fold(0.., content, Vec::new, |mut data: Vec<u8>, fragment| {
        match fragment {
            Fragment::Literal(chunk) => data.extend_from_slice(chunk),
            Fragment::Escaped(c) => data.push(c),
            Fragment::LineContinuation => {}
            Fragment::Nested(inner) => data.extend_from_slice(inner.as_bytes()),
        }
        data
    })
    .map(|data| String::from_utf8_lossy(&data).into_owned());

    delimited(tag("("), text, tag(")")).parse(input)
}

/// Parses a hexadecimal string `< ... >` into its bytes.
///
/// Whitespace between digits is ignored and an odd final digit is padded
/// with zero.
pub fn hexadecimal_string(input: &[u8]) -> IResult<&[u8], Vec<u8>> {
    let digits = take_while(|c: u8| c.is_hex_digit() || is_whitespace(c)).map(|content: &[u8]| {
        let nibbles: Vec<u8> = content
            .iter()
            .filter_map(|c| char::from(*c).to_digit(16))
            .map(|nibble| nibble as u8)
            .collect();

        nibbles
            .chunks(2)
            .map(|pair| (pair[0] << 4) | pair.get(1).copied().unwrap_or(0))
            .collect::<Vec<_>>()
    });

    delimited(tag("<"), digits, tag(">")).parse(input)
}
