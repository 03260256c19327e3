use std::fmt::Display;

use crate::types::{
    Array, Dictionary, IndirectReference, Name, Numeric, PdfString, Stream,
};

/// The closed set of values a document is built from.
///
/// Every value renders itself to PDF syntax through [`Display`] (string
/// form) and [`Object::as_bytes`] (byte form). The two only differ for
/// dictionaries carrying a stream and for raw streams, whose bytes are not
/// guaranteed to be text.
///
/// # Examples
/// true                       // Boolean
/// 42                         // Numeric (Integer)
/// 3.14                       // Numeric (Real)
/// (Hello World)              // String (Literal)
/// /Type                      // Name
/// [1 2 3]                    // Array
/// << /Key /Value >>          // Dictionary
/// 1 0 R                      // Indirect Reference
#[derive(Debug, PartialEq, Clone)]
pub enum Object {
    /// A boolean value (true/false literal)
    Boolean(bool),
    /// Numeric values (integer or real numbers)
    Numeric(Numeric),
    /// String values, literal "(string)" or hexadecimal "<ffffaa>"
    String(PdfString),
    /// Names starting with '/' followed by a sequence of characters
    Name(Name),
    /// Text written verbatim, such as content stream operators
    Text(std::string::String),
    /// Array object, contains 0 or more Objects
    Array(Array),
    /// Dictionary object, contains key-value pairs and an optional stream
    Dictionary(Dictionary),
    /// Raw byte data
    Stream(Stream),
    /// Indirect reference to an object defined elsewhere in the body
    IndirectReference(IndirectReference),
}

impl Object {
    pub fn as_bytes(&self) -> Vec<u8> {
        match self {
            Object::Dictionary(dictionary) => dictionary.as_bytes(),
            Object::Stream(stream) => stream.as_bytes().to_vec(),
            _ => self.to_string().into_bytes(),
        }
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Object::Boolean(value) => write!(f, "{value}"),
            Object::Numeric(value) => write!(f, "{value}"),
            Object::String(value) => write!(f, "{value}"),
            Object::Name(value) => write!(f, "{value}"),
            Object::Text(value) => f.write_str(value),
            Object::Array(value) => write!(f, "{value}"),
            Object::Dictionary(value) => write!(f, "{value}"),
            Object::Stream(value) => f.write_str(&std::string::String::from_utf8_lossy(
                value.as_bytes(),
            )),
            Object::IndirectReference(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::Boolean(value)
    }
}

impl From<Numeric> for Object {
    fn from(value: Numeric) -> Self {
        Object::Numeric(value)
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Numeric(value.into())
    }
}

impl From<u32> for Object {
    fn from(value: u32) -> Self {
        Object::Numeric(value.into())
    }
}

impl From<usize> for Object {
    fn from(value: usize) -> Self {
        Object::Numeric(value.into())
    }
}

impl From<f64> for Object {
    fn from(value: f64) -> Self {
        Object::Numeric(value.into())
    }
}

impl From<PdfString> for Object {
    fn from(value: PdfString) -> Self {
        Object::String(value)
    }
}

impl From<Name> for Object {
    fn from(value: Name) -> Self {
        Object::Name(value)
    }
}

impl From<Array> for Object {
    fn from(value: Array) -> Self {
        Object::Array(value)
    }
}

impl From<Dictionary> for Object {
    fn from(value: Dictionary) -> Self {
        Object::Dictionary(value)
    }
}

impl From<Stream> for Object {
    fn from(value: Stream) -> Self {
        Object::Stream(value)
    }
}

impl From<IndirectReference> for Object {
    fn from(value: IndirectReference) -> Self {
        Object::IndirectReference(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_rendering() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            input: Object,
            expected: &'static [u8],
        }

        let test_cases = [
            TestCase {
                name: "name",
                input: Object::Name(Name::from("Page")),
                expected: b"/Page",
            },
            TestCase {
                name: "integer",
                input: Object::from(12i64),
                expected: b"12",
            },
            TestCase {
                name: "real",
                input: Object::from(14.4),
                expected: b"14.4",
            },
            TestCase {
                name: "boolean",
                input: Object::from(false),
                expected: b"false",
            },
            TestCase {
                name: "literal",
                input: Object::String(PdfString::Literal("folio".to_string())),
                expected: b"(folio)",
            },
            TestCase {
                name: "raw text",
                input: Object::Text("0 0 Td".to_string()),
                expected: b"0 0 Td",
            },
            TestCase {
                name: "reference",
                input: Object::from(IndirectReference::new(3, 0)),
                expected: b"3 0 R",
            },
            TestCase {
                name: "nested containers",
                input: Object::from(Dictionary::new().with(
                    "Kids",
                    Array::new().with(IndirectReference::new(4, 0)),
                )),
                expected: b"<< /Kids [4 0 R] >>",
            },
            TestCase {
                name: "binary stream",
                input: Object::from(Stream::new(vec![0xC4, 0x00, 0xFF])),
                expected: &[0xC4, 0x00, 0xFF],
            },
        ];

        for case in &test_cases {
            assert_eq!(
                case.input.as_bytes(),
                case.expected,
                "Test '{}' failed",
                case.name
            );
        }
    }
}
