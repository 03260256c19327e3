use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    combinator::value,
    multi::many0,
    sequence::preceded,
};

/// Checks if a byte is PDF whitespace: null, tab, LF, FF, CR or space.
pub fn is_whitespace(c: u8) -> bool {
    matches!(c, 0x00 | 0x09 | 0x0A | 0x0C | 0x0D | 0x20)
}

/// Checks if a byte is one of the PDF delimiters `( ) < > [ ] { } / %`.
pub fn is_delimiter(c: u8) -> bool {
    matches!(
        c,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

/// Bytes that may appear in operator keywords and unescaped names.
pub fn is_regular(c: u8) -> bool {
    !is_whitespace(c) && !is_delimiter(c)
}

fn whitespace(input: &[u8]) -> IResult<&[u8], ()> {
    value((), take_while1(is_whitespace)).parse(input)
}

/// A comment runs from `%` to the end of the line. The line break itself
/// is left for [`whitespace`], which also lets a comment end the stream.
fn comment(input: &[u8]) -> IResult<&[u8], ()> {
    value(
        (),
        preceded(tag("%"), take_while(|c| !matches!(c, b'\r' | b'\n'))),
    )
    .parse(input)
}

/// Skips any run of whitespace and comments, possibly empty.
pub fn separator(input: &[u8]) -> IResult<&[u8], ()> {
    value((), many0(alt((whitespace, comment)))).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_parser() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            input: &'static [u8],
            expected_remainder: &'static [u8],
        }

        let test_cases = [
            TestCase {
                name: "empty input",
                input: b"",
                expected_remainder: b"",
            },
            TestCase {
                name: "nothing to skip",
                input: b"BT",
                expected_remainder: b"BT",
            },
            TestCase {
                name: "mixed whitespace",
                input: b" \t\r\n\x0C\x00BT",
                expected_remainder: b"BT",
            },
            TestCase {
                name: "comment up to line break",
                input: b"% set font\n/F1 12 Tf",
                expected_remainder: b"/F1 12 Tf",
            },
            TestCase {
                name: "consecutive comments",
                input: b"%a\r\n%b\nET",
                expected_remainder: b"ET",
            },
            TestCase {
                name: "comment ending the stream",
                input: b"  % trailing",
                expected_remainder: b"",
            },
        ];

        for case in &test_cases {
            match separator(case.input) {
                Ok((remainder, ())) => assert_eq!(
                    remainder, case.expected_remainder,
                    "Test '{}' failed: expected remainder: {:?}, got: {:?}",
                    case.name, case.expected_remainder, remainder
                ),
                Err(e) => panic!("Test '{}' failed: {e:?}", case.name),
            }
        }
    }

    #[test]
    fn test_character_classes() {
        for c in b" \t\r\n\x0C\x00" {
            assert!(is_whitespace(*c));
            assert!(!is_regular(*c));
        }
        for c in b"()<>[]{}/%" {
            assert!(is_delimiter(*c));
            assert!(!is_regular(*c));
        }
        for c in b"Tj*'\"09.-" {
            assert!(is_regular(*c));
        }
    }
}
