use std::ops::Range;

use nom::{IResult, Parser, branch::alt, bytes::complete::take_while1};
use smol_str::SmolStr;

use crate::{
    parser::{
        Result,
        array::array,
        error,
        name::name,
        numeric::numeric,
        string::{hexadecimal_string, literal_string},
        whitespace::{is_regular, separator},
    },
    types::{Name, Numeric},
};

/// An operand of a content stream operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Numeric(Numeric),
    Name(Name),
    /// Decoded text of a literal string.
    Text(String),
    /// Bytes of a hexadecimal string.
    Bytes(Vec<u8>),
    Array(Vec<Operand>),
}

impl Operand {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Operand::Numeric(value) => Some(value.as_f64()),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Operand::Name(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Text shown by a string operand. Hexadecimal bytes are read as Latin-1.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Operand::Text(text) => Some(text.clone()),
            Operand::Bytes(bytes) => Some(bytes.iter().map(|byte| char::from(*byte)).collect()),
            _ => None,
        }
    }
}

/// One operator with its operands.
///
/// `span` covers the source bytes from the first operand through the
/// operator keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub operator: SmolStr,
    pub operands: Vec<Operand>,
    pub span: Range<usize>,
}

impl Operation {
    pub fn operand(&self, index: usize) -> Option<&Operand> {
        self.operands.get(index)
    }
}

enum Token {
    Operand(Operand),
    Operator(SmolStr),
}

pub(super) fn operand(input: &[u8]) -> IResult<&[u8], Operand> {
    alt((
        numeric.map(Operand::Numeric),
        name.map(Operand::Name),
        literal_string.map(Operand::Text),
        hexadecimal_string.map(Operand::Bytes),
        array.map(Operand::Array),
    ))
    .parse(input)
}

fn operator(input: &[u8]) -> IResult<&[u8], SmolStr> {
    take_while1(is_regular)
        .map(|keyword: &[u8]| SmolStr::from(String::from_utf8_lossy(keyword)))
        .parse(input)
}

fn token(input: &[u8]) -> IResult<&[u8], Token> {
    alt((operand.map(Token::Operand), operator.map(Token::Operator))).parse(input)
}

pub(super) fn operations(stream: &[u8]) -> Result<Vec<Operation>> {
    let offset = |rest: &[u8]| stream.len() - rest.len();

    let mut result = Vec::new();
    let mut operands = Vec::new();
    let mut start = None;
    let mut input = stream;

    loop {
        let (rest, ()) = separator(input).map_err(|_| error::Error::UnexpectedToken {
            offset: offset(input),
        })?;
        if rest.is_empty() {
            break;
        }

        let begin = offset(rest);
        let (rest, token) =
            token(rest).map_err(|_| error::Error::UnexpectedToken { offset: begin })?;

        match token {
            Token::Operand(value) => {
                start.get_or_insert(begin);
                operands.push(value);
            }
            Token::Operator(operator) => result.push(Operation {
                operator,
                operands: std::mem::take(&mut operands),
                span: start.take().unwrap_or(begin)..offset(rest),
            }),
        }

        input = rest;
    }

    if let Some(offset) = start {
        return Err(error::Error::DanglingOperands { offset }.into());
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_text_object() -> std::result::Result<(), crate::parser::Error> {
        let stream = b"BT /F1 12 Tf 0 0 Td 14.4 TL\n(Hello World!) Tj T*\nET";
        let operations = operations(stream)?;

        let operators: Vec<&str> = operations.iter().map(|op| op.operator.as_str()).collect();
        assert_eq!(operators, ["BT", "Tf", "Td", "TL", "Tj", "T*", "ET"]);

        let spans: Vec<&[u8]> = operations.iter().map(|op| &stream[op.span.clone()]).collect();
        assert_eq!(
            spans,
            [
                &b"BT"[..],
                &b"/F1 12 Tf"[..],
                &b"0 0 Td"[..],
                &b"14.4 TL"[..],
                &b"(Hello World!) Tj"[..],
                &b"T*"[..],
                &b"ET"[..],
            ]
        );

        let font = &operations[1];
        assert_eq!(font.operand(0).and_then(Operand::as_name), Some("F1"));
        assert_eq!(font.operand(1).and_then(Operand::as_f64), Some(12.0));
        assert_eq!(
            operations[4].operand(0).and_then(Operand::as_text),
            Some("Hello World!".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_operations() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            input: &'static [u8],
            expected: Option<Vec<&'static str>>,
        }

        let test_cases = [
            TestCase {
                name: "empty stream",
                input: b"",
                expected: Some(vec![]),
            },
            TestCase {
                name: "only whitespace and comments",
                input: b"  % nothing here\n ",
                expected: Some(vec![]),
            },
            TestCase {
                name: "image placement",
                input: b"q 104 0 0 71 10 20 cm /I1 Do Q",
                expected: Some(vec!["q", "cm", "Do", "Q"]),
            },
            TestCase {
                name: "quote operators",
                input: b"(a) ' 1 2 (b) \"",
                expected: Some(vec!["'", "\""]),
            },
            TestCase {
                name: "operators without separators",
                input: b"[(A)-5(B)]TJ/F2 9 Tf",
                expected: Some(vec!["TJ", "Tf"]),
            },
            TestCase {
                name: "dangling operands",
                input: b"BT 1 2",
                expected: None,
            },
            TestCase {
                name: "stray delimiter",
                input: b"BT ) ET",
                expected: None,
            },
        ];

        for case in &test_cases {
            let result = operations(case.input).ok().map(|operations| {
                operations
                    .iter()
                    .map(|op| op.operator.to_string())
                    .collect::<Vec<_>>()
            });
            let expected = case
                .expected
                .as_ref()
                .map(|operators| operators.iter().map(|op| op.to_string()).collect::<Vec<_>>());
            assert_eq!(result, expected, "Test '{}' failed", case.name);
        }
    }

    #[test]
    fn reports_offsets() {
        let error = operations(b"BT 1 2").map(|_| ()).map_err(|e| e.to_string());
        assert_eq!(
            error,
            Err("Malformed content stream: operands without operator at offset 3".to_string())
        );

        let error = operations(b"BT ) ET").map(|_| ()).map_err(|e| e.to_string());
        assert_eq!(
            error,
            Err("Malformed content stream: unexpected data at offset 3".to_string())
        );
    }
}
