use std::str::FromStr;

use smol_str::SmolStr;
use snafu::Snafu;

use crate::types::{Dictionary, Name};

mod metrics;

#[derive(Debug, Snafu)]
pub struct Error(error::Error);

/// The fourteen fonts every PDF reader provides without embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base14 {
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
    Symbol,
    ZapfDingbats,
}

impl Base14 {
    pub const ALL: [Base14; 14] = [
        Base14::TimesRoman,
        Base14::TimesBold,
        Base14::TimesItalic,
        Base14::TimesBoldItalic,
        Base14::Helvetica,
        Base14::HelveticaBold,
        Base14::HelveticaOblique,
        Base14::HelveticaBoldOblique,
        Base14::Courier,
        Base14::CourierBold,
        Base14::CourierOblique,
        Base14::CourierBoldOblique,
        Base14::Symbol,
        Base14::ZapfDingbats,
    ];

    /// The `/BaseFont` name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Base14::TimesRoman => "Times-Roman",
            Base14::TimesBold => "Times-Bold",
            Base14::TimesItalic => "Times-Italic",
            Base14::TimesBoldItalic => "Times-BoldItalic",
            Base14::Helvetica => "Helvetica",
            Base14::HelveticaBold => "Helvetica-Bold",
            Base14::HelveticaOblique => "Helvetica-Oblique",
            Base14::HelveticaBoldOblique => "Helvetica-BoldOblique",
            Base14::Courier => "Courier",
            Base14::CourierBold => "Courier-Bold",
            Base14::CourierOblique => "Courier-Oblique",
            Base14::CourierBoldOblique => "Courier-BoldOblique",
            Base14::Symbol => "Symbol",
            Base14::ZapfDingbats => "ZapfDingbats",
        }
    }

    /// Advance width of `c` in 1/1000 of the font size.
    ///
    /// Obliques share the widths of their upright face. The Times variants
    /// are measured with the Times-Roman table, Symbol and ZapfDingbats with
    /// a flat width.
    pub fn width(&self, c: char) -> u16 {
        match self {
            Base14::Courier
            | Base14::CourierBold
            | Base14::CourierOblique
            | Base14::CourierBoldOblique => metrics::COURIER,
            Base14::Helvetica | Base14::HelveticaOblique => metrics::lookup(&metrics::HELVETICA, c),
            Base14::HelveticaBold | Base14::HelveticaBoldOblique => {
                metrics::lookup(&metrics::HELVETICA_BOLD, c)
            }
            Base14::TimesRoman
            | Base14::TimesBold
            | Base14::TimesItalic
            | Base14::TimesBoldItalic => metrics::lookup(&metrics::TIMES_ROMAN, c),
            Base14::Symbol | Base14::ZapfDingbats => metrics::FALLBACK_WIDTH,
        }
    }
}

impl FromStr for Base14 {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Base14::ALL
            .into_iter()
            .find(|font| font.as_str().eq_ignore_ascii_case(source))
            .ok_or_else(|| {
                error::Error::UnknownFont {
                    name: source.to_string(),
                }
                .into()
            })
    }
}

impl std::fmt::Display for Base14 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A standard font registered under a resource label such as `F1`.
///
/// The label is how content streams select the font (`/F1 12 Tf`) and how
/// the font is keyed in a page's `/Font` resources.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    label: SmolStr,
    family: Base14,
}

impl Font {
    pub fn new(label: impl Into<SmolStr>, family: Base14) -> Self {
        Self {
            label: label.into(),
            family,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn family(&self) -> Base14 {
        self.family
    }

    /// Rendered width of `text` in points at `size`.
    pub fn text_width(&self, text: &str, size: f64) -> f64 {
        let units: u32 = text.chars().map(|c| u32::from(self.family.width(c))).sum();
        f64::from(units) * size / 1000.0
    }

    pub fn dictionary(&self) -> Dictionary {
        Dictionary::new()
            .with("Type", Name::from("Font"))
            .with("Subtype", Name::from("Type1"))
            .with("BaseFont", Name::from(self.family.as_str()))
    }
}

mod error {
    use snafu::Snafu;

    #[derive(Debug, Snafu)]
    #[snafu(visibility(pub(super)))]
    pub(super) enum Error {
        #[snafu(display("Unknown standard font: {name}"))]
        UnknownFont { name: String },
    }
}
