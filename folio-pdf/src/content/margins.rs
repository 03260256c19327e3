use snafu::ResultExt;

use crate::{
    content::{Content, Result, error, splice},
    format::{Margins, PageFormat},
    parser,
    types::Numeric,
};

/// Moves text to the top left corner inside the page margins.
///
/// The first `Td` of every text object is rewritten to start at the left
/// margin, one top margin below the top edge of the page. The rest of the
/// inner stream is copied byte for byte.
#[derive(Debug, Clone, PartialEq)]
pub struct Margined {
    inner: Box<Content>,
    format: PageFormat,
    margins: Margins,
}

impl Margined {
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
        let operations = parser::operations(&stream).context(error::ParseSnafu)?;

        let (x, y) = self.margins.origin(&self.format);
        let origin = format!("{} {} Td", Numeric::Real(x), Numeric::Real(y));

        let mut edits = Vec::new();
        let mut pending = false;
        for operation in &operations {
            match operation.operator.as_str() {
                "BT" => pending = true,
                "ET" => pending = false,
                "Td" if pending => {
                    edits.push((operation.span.clone(), origin.clone()));
                    pending = false;
                }
                _ => {}
            }
        }

        Ok(splice(&stream, &edits))
    }
}
