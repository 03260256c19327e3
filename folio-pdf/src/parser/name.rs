use nom::{
    AsChar, IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while_m_n, take_while1},
    error::{Error, ErrorKind},
    multi::many0,
    sequence::preceded,
};

use crate::{parser::whitespace::is_regular, types::Name};

/// Parses a name such as `/F1`, decoding `#xx` escapes.
pub fn name(input: &[u8]) -> IResult<&[u8], Name> {
    let escape = preceded(tag("#"), take_while_m_n(2, 2, |c: u8| c.is_hex_digit())).map_res(
        |code: &[u8]| {
            str::from_utf8(code)
                .ok()
                .and_then(|code| u8::from_str_radix(code, 16).ok())
                .map(|byte| vec![byte])
                .ok_or(Error::new(input, ErrorKind::HexDigit))
        },
    );
    let plain = take_while1(|c: u8| c != b'#' && is_regular(c)).map(|plain: &[u8]| plain.to_vec());

    let body = many0(alt((plain, escape))).map_res(|parts| {
        String::from_utf8(parts.concat()).map_err(|_| Error::new(input, ErrorKind::Char))
    });

    preceded(tag("/"), body).map(Name::from).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_parser() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            input: &'static [u8],
            expected: Option<(&'static str, &'static [u8])>,
        }

        let test_cases = [
            TestCase {
                name: "font label",
                input: b"/F1 12 Tf",
                expected: Some(("F1", b" 12 Tf")),
            },
            TestCase {
                name: "escaped space",
                input: b"/A#20B",
                expected: Some(("A B", b"")),
            },
            TestCase {
                name: "escape without regular symbols",
                input: b"/#28#29",
                expected: Some(("()", b"")),
            },
            TestCase {
                name: "empty name",
                input: b"/ Do",
                expected: Some(("", b" Do")),
            },
            TestCase {
                name: "delimiter ends the name",
                input: b"/I1[",
                expected: Some(("I1", b"[")),
            },
            TestCase {
                name: "two names in a row",
                input: b"/Type/Page",
                expected: Some(("Type", b"/Page")),
            },
            TestCase {
                name: "broken escape stops the name",
                input: b"/A#zz",
                expected: Some(("A", b"#zz")),
            },
            TestCase {
                name: "missing slash",
                input: b"F1",
                expected: None,
            },
        ];

        for case in &test_cases {
            let result = name(case.input);
            match (&case.expected, result) {
                (Some((value, remainder)), Ok((actual_remainder, actual))) => {
                    assert_eq!(
                        actual.to_string(),
                        format!("/{value}"),
                        "Test '{}' failed",
                        case.name
                    );
                    assert_eq!(actual_remainder, *remainder, "Test '{}' failed", case.name);
                }
                (None, Err(_)) => {}
                (expected, actual) => panic!(
                    "Test '{}' failed: expected {:?}, got {:?}",
                    case.name, expected, actual
                ),
            }
        }
    }
}
