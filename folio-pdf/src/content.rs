//! Page content: the operator streams drawn on a page.
//!
//! A [`Content`] renders one content stream object and declares the
//! resources its operators refer to. Text and images are the leaves;
//! sequences join several streams into one object, and the remaining
//! variants decorate an inner content by overriding exactly one aspect of
//! it (text origin, word spacing or stream encoding).

mod flate;
mod image;
mod justified;
mod margins;
mod text;

use snafu::Snafu;

pub use flate::Flate;
pub use image::Image;
pub use justified::Justified;
pub use margins::Margined;
pub use text::Text;

use crate::{
    format::{Margins, PageFormat},
    structures::{Context, Resource},
    types::{Dictionary, Indirect, IndirectObject},
};

#[derive(Debug, Snafu)]
pub struct Error(error::Error);
type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(Text),
    Image(Image),
    /// Streams of several contents joined into one object.
    Sequence(Vec<Content>),
    Margined(Margined),
    Justified(Justified),
    Flate(Flate),
}

impl Content {
    /// Moves the text origin of every text object to the top left corner
    /// inside `margins`.
    pub fn margined(self, format: PageFormat, margins: Margins) -> Self {
        Content::Margined(Margined::new(self, format, margins))
    }

    /// Stretches every line but the last of each text object to the width
    /// between the side `margins`.
    pub fn justified(self, format: PageFormat, margins: Margins) -> Self {
        Content::Justified(Justified::new(self, format, margins))
    }

    /// Writes the stream zlib compressed.
    pub fn compressed(self) -> Self {
        Content::Flate(Flate::new(self))
    }

    /// Operator bytes, before any stream filter is applied.
    pub fn stream(&self) -> Result<Vec<u8>> {
        match self {
            Content::Text(text) => Ok(text.stream()),
            Content::Image(image) => image.stream(),
            Content::Sequence(contents) => {
                let streams = contents
                    .iter()
                    .map(Content::stream)
                    .collect::<Result<Vec<_>>>()?;
                Ok(streams.join(&b'\n'))
            }
            Content::Margined(margined) => margined.stream(),
            Content::Justified(justified) => justified.stream(),
            Content::Flate(flate) => flate.inner().stream(),
        }
    }

    /// Dictionary of the stream object, with the stream as written.
    ///
    /// Compression applies to the whole object once any part of it asked
    /// for it: decorators around a [`Flate`] edit the plain operators, and
    /// the result is compressed again.
    pub fn dictionary(&self) -> Result<Dictionary> {
        match self {
            Content::Flate(flate) => flate.dictionary(),
            _ if self.is_compressed() => Flate::deflate(self.stream()?),
            _ => Ok(Dictionary::new().with_stream(self.stream()?)),
        }
    }

    /// Whether the object is written with `/Filter /FlateDecode`.
    pub fn is_compressed(&self) -> bool {
        match self {
            Content::Text(_) | Content::Image(_) => false,
            Content::Sequence(contents) => contents.iter().any(Content::is_compressed),
            Content::Margined(margined) => margined.inner().is_compressed(),
            Content::Justified(justified) => justified.inner().is_compressed(),
            Content::Flate(_) => true,
        }
    }

    /// Resources named by the operators, without repetitions.
    pub fn resources(&self) -> Vec<Resource> {
        match self {
            Content::Text(text) => vec![Resource::Font(text.font().clone())],
            Content::Image(image) => vec![Resource::Image(image.xobject().clone())],
            Content::Sequence(contents) => {
                let mut result: Vec<Resource> = Vec::new();
                for resource in contents.iter().flat_map(Content::resources) {
                    if !result.contains(&resource) {
                        result.push(resource);
                    }
                }
                result
            }
            Content::Margined(margined) => margined.inner().resources(),
            Content::Justified(justified) => justified.inner().resources(),
            Content::Flate(flate) => flate.inner().resources(),
        }
    }

    /// Numbers the content object.
    ///
    /// The number is taken before the stream is rendered.
    pub fn indirect(&self, context: &mut Context) -> Result<Indirect> {
        let number = context.next_number();
        let dictionary = self.dictionary()?;

        tracing::trace!(number, length = dictionary.stream().map(|s| s.len()), "content object");

        Ok(Indirect::Object(IndirectObject::new(number, 0, dictionary)))
    }
}

impl From<Text> for Content {
    fn from(value: Text) -> Self {
        Content::Text(value)
    }
}

impl From<Image> for Content {
    fn from(value: Image) -> Self {
        Content::Image(value)
    }
}

impl From<Vec<Content>> for Content {
    fn from(value: Vec<Content>) -> Self {
        Content::Sequence(value)
    }
}

/// Copies `stream`, replacing the byte ranges of `edits` with new text.
///
/// Edits must be sorted and must not overlap. An empty range inserts.
fn splice(stream: &[u8], edits: &[(std::ops::Range<usize>, String)]) -> Vec<u8> {
    let mut result = Vec::with_capacity(stream.len());
    let mut position = 0;

    for (range, replacement) in edits {
        result.extend_from_slice(&stream[position..range.start]);
        result.extend_from_slice(replacement.as_bytes());
        position = range.end;
    }

    result.extend_from_slice(&stream[position..]);
    result
}

mod error {
    use snafu::Snafu;

    use crate::{image, parser, types::StreamError};

    #[derive(Debug, Snafu)]
    #[snafu(visibility(pub(super)))]
    pub(super) enum Error {
        #[snafu(display("Failed to read content stream"))]
        Parse { source: parser::Error },

        #[snafu(display("Text shown before any font was selected, at offset {offset}"))]
        NoFont { offset: usize },

        #[snafu(display("Font /{label} is not declared by the justified content"))]
        UnknownFont { label: String },

        #[snafu(display("Failed to compress content stream"))]
        Compression { source: StreamError },

        #[snafu(display("Failed to read image geometry"))]
        Image { source: image::Error },
    }
}
