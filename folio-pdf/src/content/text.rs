use crate::{
    font::Font,
    text::{escaped, multiline},
    types::Numeric,
};

/// Leading as a multiple of the font size, when none is given.
const DEFAULT_LEADING: f64 = 1.2;

/// A block of text drawn line by line with a single font.
///
/// Every line becomes `(line) Tj T*` inside one `BT`..`ET` text object,
/// starting at the given position and moving down by the leading.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    font: Font,
    size: f64,
    x: f64,
    y: f64,
    leading: Option<f64>,
    width: Option<usize>,
    text: String,
}

impl Text {
    pub fn new(font: Font, size: f64, text: impl Into<String>) -> Self {
        Self {
            font,
            size,
            x: 0.0,
            y: 0.0,
            leading: None,
            width: None,
            text: text.into(),
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn leading(mut self, leading: f64) -> Self {
        self.leading = Some(leading);
        self
    }

    /// Word wraps the text at `width` characters instead of keeping its
    /// own line breaks.
    pub fn wrapped(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn lines(&self) -> Vec<String> {
        match self.width {
            Some(width) => multiline(&self.text, width),
            None if self.text.is_empty() => vec![String::new()],
            None => self.text.lines().map(str::to_string).collect(),
        }
    }

    pub fn stream(&self) -> Vec<u8> {
        let leading = self.leading.unwrap_or(self.size * DEFAULT_LEADING);

        let mut result = format!(
            "BT /{} {} Tf {} {} Td {} TL\n",
            self.font.label(),
            Numeric::Real(self.size),
            Numeric::Real(self.x),
            Numeric::Real(self.y),
            Numeric::Real(leading),
        );
        for line in self.lines() {
            result.push_str(&format!("({}) Tj T*\n", escaped(&line)));
        }
        result.push_str("ET");

        result.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::font::Base14;

    #[test]
    fn test_text_stream() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            text: Text,
            expected: &'static str,
        }

        let font = Font::new("F1", Base14::Helvetica);
        let test_cases = [
            TestCase {
                name: "single line",
                text: Text::new(font.clone(), 12.0, "Hello World!"),
                expected: "BT /F1 12 Tf 0 0 Td 14.4 TL\n(Hello World!) Tj T*\nET",
            },
            TestCase {
                name: "explicit line breaks",
                text: Text::new(font.clone(), 10.0, "one\ntwo").at(72.0, 770.5),
                expected: "BT /F1 10 Tf 72 770.5 Td 12 TL\n(one) Tj T*\n(two) Tj T*\nET",
            },
            TestCase {
                name: "wrapped with custom leading",
                text: Text::new(font.clone(), 12.0, "Hello World!")
                    .wrapped(5)
                    .leading(20.0),
                expected: "BT /F1 12 Tf 0 0 Td 20 TL\n(Hello) Tj T*\n(World!) Tj T*\nET",
            },
            TestCase {
                name: "escaped characters",
                text: Text::new(font.clone(), 11.0, "f(x) \\ y"),
                expected: "BT /F1 11 Tf 0 0 Td 13.2 TL\n(f\\(x\\) \\\\ y) Tj T*\nET",
            },
            TestCase {
                name: "empty text keeps one line",
                text: Text::new(font.clone(), 12.0, ""),
                expected: "BT /F1 12 Tf 0 0 Td 14.4 TL\n() Tj T*\nET",
            },
        ];

        for case in &test_cases {
            let stream = case.text.stream();
            assert_eq!(
                String::from_utf8_lossy(&stream),
                case.expected,
                "Test '{}' failed",
                case.name
            );
        }
    }
}
