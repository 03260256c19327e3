use std::fmt::Display;

use crate::text::escaped;

/// Represents string values written into a PDF document.
///
/// PDF supports two types of string objects:
/// - Literal strings: Enclosed in parentheses `(content)`
/// - Hexadecimal strings: Enclosed in angle brackets `<hex data>`
///
/// A literal keeps its content exactly as given: escaping is the job of
/// whoever builds it (see [`crate::text::escaped`]), so the same value can
/// carry text that was already escaped by a content stream.
///
/// # Examples
/// ```text
/// (Hello World)              // Literal string
/// (Test\()                   // Literal string with escaped parenthesis
/// <FEFF00E9>                 // Hexadecimal string, UTF-16BE with byte order mark
/// ```
#[derive(Debug, PartialEq, Clone)]
pub enum PdfString {
    /// A literal string enclosed in parentheses, stored already escaped.
    Literal(std::string::String),
    /// A hexadecimal string representing binary data enclosed in angle brackets.
    Hexadecimal(Vec<u8>),
}

impl PdfString {
    /// Builds a text string suitable for document metadata.
    ///
    /// ASCII text becomes an escaped literal. Anything else is encoded as
    /// UTF-16BE with a byte order mark, written in hexadecimal form.
    pub fn text(value: &str) -> Self {
        if value.is_ascii() {
            return PdfString::Literal(escaped(value));
        }

        let mut data = vec![0xFE, 0xFF];
        for unit in value.encode_utf16() {
            data.extend_from_slice(&unit.to_be_bytes());
        }

        PdfString::Hexadecimal(data)
    }

    /// Returns the underlying byte representation of the PDF string.
    ///
    /// For literal strings, returns the UTF-8 encoded bytes of the string content.
    /// For hexadecimal strings, returns the binary data directly.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PdfString::Literal(data) => data.as_bytes(),
            PdfString::Hexadecimal(data) => data.as_slice(),
        }
    }
}

impl Display for PdfString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PdfString::Literal(data) => write!(f, "({data})"),
            PdfString::Hexadecimal(data) => {
                f.write_str("<")?;
                for byte in data {
                    write!(f, "{byte:02X}")?;
                }
                f.write_str(">")
            }
        }
    }
}
