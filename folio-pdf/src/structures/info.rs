use chrono::{DateTime, FixedOffset};

use crate::{
    structures::Context,
    types::{Dictionary, Indirect, IndirectObject, Name, Object, PdfString},
};

/// Name written as `/Producer` unless the caller overrides it.
pub const ENGINE: &str = "folio";

/// Whether the document has been trapped for printing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Trap {
    True,
    False,
    #[default]
    Unknown,
}

impl Trap {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trap::True => "True",
            Trap::False => "False",
            Trap::Unknown => "Unknown",
        }
    }
}

/// The document information dictionary.
///
/// Starts as `<< /Producer (folio) >>`. Setters return a new value; text
/// entries are written as literal strings when ASCII and as UTF-16
/// otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Information {
    dictionary: Dictionary,
}

impl Default for Information {
    fn default() -> Self {
        Self {
            dictionary: Dictionary::new().with("Producer", PdfString::text(ENGINE)),
        }
    }
}

impl Information {
    /// Information dictionary with no entries at all.
    pub fn empty() -> Self {
        Self {
            dictionary: Dictionary::new(),
        }
    }

    pub fn with(&self, key: &str, value: impl Into<Object>) -> Self {
        Self {
            dictionary: self.dictionary.with(key, value),
        }
    }

    pub fn with_text(&self, key: &str, value: &str) -> Self {
        self.with(key, PdfString::text(value))
    }

    pub fn title(&self, value: &str) -> Self {
        self.with_text("Title", value)
    }

    pub fn author(&self, value: &str) -> Self {
        self.with_text("Author", value)
    }

    pub fn subject(&self, value: &str) -> Self {
        self.with_text("Subject", value)
    }

    pub fn keywords(&self, value: &str) -> Self {
        self.with_text("Keywords", value)
    }

    pub fn creator(&self, value: &str) -> Self {
        self.with_text("Creator", value)
    }

    pub fn producer(&self, value: &str) -> Self {
        self.with_text("Producer", value)
    }

    pub fn creation_date(&self, value: DateTime<FixedOffset>) -> Self {
        self.with("CreationDate", date(value))
    }

    pub fn mod_date(&self, value: DateTime<FixedOffset>) -> Self {
        self.with("ModDate", date(value))
    }

    pub fn trapped(&self, value: Trap) -> Self {
        self.with("Trapped", Name::from(value.as_str()))
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn indirect(&self, context: &mut Context) -> Indirect {
        let number = context.next_number();
        Indirect::Object(IndirectObject::new(number, 0, self.dictionary.clone()))
    }
}

/// Date string in the `D:YYYYMMDDHHmmSS+HH'mm'` form.
fn date(value: DateTime<FixedOffset>) -> PdfString {
    let offset = value.offset().local_minus_utc();
    let sign = if offset < 0 { '-' } else { '+' };
    let minutes = offset.abs() / 60;

    PdfString::Literal(format!(
        "{}{}{:02}'{:02}'",
        value.format("D:%Y%m%d%H%M%S"),
        sign,
        minutes / 60,
        minutes % 60
    ))
}
