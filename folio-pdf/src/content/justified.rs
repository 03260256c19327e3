use snafu::{OptionExt, ResultExt};

use crate::{
    content::{Content, Result, error, splice},
    font::Font,
    format::{Margins, PageFormat},
    parser::{self, Operand},
    structures::Resource,
    types::Numeric,
};

/// Spreads the words of each line across the width between the margins.
///
/// A `Tw` word spacing operator is inserted before every `Tj`, computed
/// from the line's width in the font selected by the preceding `Tf`. The
/// last line of each text object stays left aligned, as do lines with a
/// single space or none.
#[derive(Debug, Clone, PartialEq)]
pub struct Justified {
    inner: Box<Content>,
    format: PageFormat,
    margins: Margins,
}

impl Justified {
    pub fn new(inner: Content, format: PageFormat, margins: Margins) -> Self {
        Self {
            inner: Box::new(inner),
            format,
            margins,
        }
    }

    pub fn inner(&self) -> &Content {
        &self.inner
    }

    pub fn stream(&self) -> Result<Vec<u8>> {
        let stream = self.inner.stream()?;
        let fonts: Vec<Font> = self
            .inner
            .resources()
            .into_iter()
            .filter_map(|resource| match resource {
                Resource::Font(font) => Some(font),
                Resource::Image(_) => None,
            })
            .collect();

        justify(&stream, &fonts, self.margins.usable_width(&self.format))
    }
}

fn justify(stream: &[u8], fonts: &[Font], usable: f64) -> Result<Vec<u8>> {
    let operations = parser::operations(stream).context(error::ParseSnafu)?;

    let mut edits = Vec::new();
    let mut lines: Vec<(usize, f64)> = Vec::new();
    let mut current: Option<(&Font, f64)> = None;

    for operation in &operations {
        match operation.operator.as_str() {
            "Tf" => {
                let label = operation
                    .operand(0)
                    .and_then(Operand::as_name)
                    .unwrap_or_default();
                let size = operation
                    .operand(1)
                    .and_then(Operand::as_f64)
                    .unwrap_or_default();
                let font = fonts
                    .iter()
                    .find(|font| font.label() == label)
                    .context(error::UnknownFontSnafu { label })?;

                current = Some((font, size));
            }
            "Tj" => {
                let (font, size) = current.context(error::NoFontSnafu {
                    offset: operation.span.start,
                })?;
                let text = operation
                    .operand(0)
                    .and_then(Operand::as_text)
                    .unwrap_or_default();

                let spaces = text.matches(' ').count();
                let spacing = if spaces > 1 {
                    (usable - font.text_width(&text, size)) / spaces as f64
                } else {
                    0.0
                };

                lines.push((operation.span.start, spacing));
            }
            "ET" => flush(&mut lines, &mut edits),
            _ => {}
        }
    }
    flush(&mut lines, &mut edits);

    tracing::trace!(lines = edits.len(), usable, "justified text");

    Ok(splice(stream, &edits))
}

/// Turns the lines of one text object into `Tw` insertions, the last one
/// reset to zero.
fn flush(lines: &mut Vec<(usize, f64)>, edits: &mut Vec<(std::ops::Range<usize>, String)>) {
    let last = lines.len().saturating_sub(1);

    for (index, (offset, spacing)) in lines.drain(..).enumerate() {
        let spacing = if index == last { 0.0 } else { spacing };
        edits.push((offset..offset, format!("{} Tw ", Numeric::Real(spacing))));
    }
}
