use std::io::Write;

use flate2::{Compression, write::ZlibEncoder};
use snafu::{ResultExt, Snafu};

#[derive(Debug, Snafu)]
pub struct Error(error::Error);
type Result<T> = std::result::Result<T, Error>;

/// Raw bytes attached to a dictionary.
///
/// PDF streams are used to store large amounts of data, such as:
/// - Content streams for page descriptions
/// - Image samples and palettes
///
/// The data is opaque to the writer: it is emitted between the `stream` and
/// `endstream` keywords without any escaping.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Stream {
    data: Vec<u8>,
}

impl Stream {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Compresses the data into a zlib wrapped DEFLATE stream, the form
    /// expected by the `/FlateDecode` filter.
    pub fn deflated(&self) -> Result<Stream> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(&self.data)
            .context(error::CompressionSnafu)?;
        let data = encoder.finish().context(error::CompressionSnafu)?;

        Ok(Stream { data })
    }
}

impl From<Vec<u8>> for Stream {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

mod error {
    use snafu::Snafu;

    #[derive(Debug, Snafu)]
    #[snafu(visibility(pub(super)))]
    pub(super) enum Error {
        #[snafu(display("Error during compression"))]
        Compression { source: std::io::Error },
    }
}
