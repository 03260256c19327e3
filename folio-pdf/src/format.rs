//! Page sizes and margins.

use crate::types::Rectangle;

/// Points per centimeter.
pub const POINTS_PER_CM: f64 = 72.0 / 2.54;

/// Size of a page in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFormat {
    pub width: f64,
    pub height: f64,
}

impl PageFormat {
    pub const A4: PageFormat = PageFormat::new(595.0, 842.0);
    pub const LETTER: PageFormat = PageFormat::new(612.0, 792.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The same format turned on its side.
    pub fn landscape(&self) -> Self {
        Self::new(self.height, self.width)
    }

    /// `MediaBox` of a page in this format.
    pub fn media_box(&self) -> Rectangle {
        Rectangle::sized(self.width, self.height)
    }
}

impl Default for PageFormat {
    fn default() -> Self {
        Self::A4
    }
}

/// Page margins in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same margin on every side.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Text origin for a page of `format`: the left margin and the top
    /// margin measured down from the top edge, in points.
    pub fn origin(&self, format: &PageFormat) -> (f64, f64) {
        (
            self.left * POINTS_PER_CM,
            format.height - self.top * POINTS_PER_CM,
        )
    }

    /// Horizontal room left between the side margins, in points.
    pub fn usable_width(&self, format: &PageFormat) -> f64 {
        format.width - (self.left + self.right) * POINTS_PER_CM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::types::Array;

    #[test]
    fn test_margins() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            margins: Margins,
            format: PageFormat,
            expected_origin: (f64, f64),
            expected_usable: f64,
        }

        let test_cases = [
            TestCase {
                name: "no margins",
                margins: Margins::default(),
                format: PageFormat::A4,
                expected_origin: (0.0, 842.0),
                expected_usable: 595.0,
            },
            TestCase {
                name: "one inch on every side",
                margins: Margins::uniform(2.54),
                format: PageFormat::LETTER,
                expected_origin: (72.0, 720.0),
                expected_usable: 468.0,
            },
            TestCase {
                name: "uneven margins on landscape A4",
                margins: Margins::new(2.54, 0.0, 0.0, 5.08),
                format: PageFormat::A4.landscape(),
                expected_origin: (144.0, 523.0),
                expected_usable: 698.0,
            },
        ];

        for case in &test_cases {
            let (x, y) = case.margins.origin(&case.format);
            let usable = case.margins.usable_width(&case.format);

            assert!(
                (x - case.expected_origin.0).abs() < 1e-9 && (y - case.expected_origin.1).abs() < 1e-9,
                "Test '{}' failed: expected origin {:?}, got {:?}",
                case.name,
                case.expected_origin,
                (x, y)
            );
            assert!(
                (usable - case.expected_usable).abs() < 1e-9,
                "Test '{}' failed: expected usable width {}, got {}",
                case.name,
                case.expected_usable,
                usable
            );
        }
    }

    #[test]
    fn media_box() {
        assert_eq!(
            Array::from(PageFormat::A4.media_box()).to_string(),
            "[0 0 595 842]"
        );
    }
}
