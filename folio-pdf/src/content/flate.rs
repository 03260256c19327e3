use snafu::ResultExt;

use crate::{
    content::{Content, Result, error},
    types::{Dictionary, Name, Stream},
};

/// Writes the inner content's stream zlib compressed.
///
/// The inner content still renders its plain operators through
/// [`Content::stream`], so decorators wrapped around a `Flate` keep working
/// on readable text; the enclosing object is then compressed as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct Flate {
    inner: Box<Content>,
}

impl Flate {
    pub fn new(inner: Content) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    pub fn inner(&self) -> &Content {
        &self.inner
    }

    pub fn dictionary(&self) -> Result<Dictionary> {
        Self::deflate(self.inner.stream()?)
    }

    /// Stream object holding `stream` deflated, with its `/Filter`.
    pub(super) fn deflate(stream: Vec<u8>) -> Result<Dictionary> {
        let stream = Stream::new(stream)
            .deflated()
            .context(error::CompressionSnafu)?;

        Ok(Dictionary::new()
            .with_stream(stream)
            .with("Filter", Name::from("FlateDecode")))
    }
}
