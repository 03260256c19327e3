use std::sync::Arc;

use smol_str::SmolStr;
use snafu::{ResultExt, Snafu};

pub mod jpeg;
pub mod png;

pub use jpeg::Jpeg;
pub use png::Png;

use crate::types::{Dictionary, IndirectReference, Name};

#[derive(Debug, Snafu)]
pub struct Error(error::Error);
type Result<T> = std::result::Result<T, Error>;

/// Color model of decoded image samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    DeviceGray,
    DeviceRgb,
    DeviceCmyk,
    /// Samples are indices into a palette of RGB triplets.
    Indexed,
}

impl ColorSpace {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorSpace::DeviceGray => "DeviceGray",
            ColorSpace::DeviceRgb => "DeviceRGB",
            ColorSpace::DeviceCmyk => "DeviceCMYK",
            ColorSpace::Indexed => "Indexed",
        }
    }

    /// Color components per sample.
    pub fn colors(&self) -> u8 {
        match self {
            ColorSpace::DeviceGray | ColorSpace::Indexed => 1,
            ColorSpace::DeviceRgb => 3,
            ColorSpace::DeviceCmyk => 4,
        }
    }
}

/// Image geometry as read from the source header.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub width: u32,
    pub height: u32,
    pub depth: u8,
    pub color_space: ColorSpace,
}

/// An image reduced to what an image XObject needs.
///
/// `body` holds the sample data still in its source encoding (zlib for PNG,
/// the whole file for JPEG). `palette` is empty unless the image is indexed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawImage {
    pub header: Header,
    pub body: Vec<u8>,
    pub palette: Vec<u8>,
}

/// Image bytes of a supported format.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    Png(Png),
    Jpeg(Jpeg),
}

impl ImageSource {
    /// Picks the decoder from the leading signature bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.starts_with(&png::SIGNATURE) {
            Ok(ImageSource::Png(Png::new(bytes)))
        } else if bytes.starts_with(&jpeg::SOI) {
            Ok(ImageSource::Jpeg(Jpeg::new(bytes)))
        } else {
            Err(error::Error::UnknownFormat.into())
        }
    }

    pub fn raw(&self) -> Result<&RawImage> {
        match self {
            ImageSource::Png(png) => Ok(png.raw().context(error::PngSnafu)?),
            ImageSource::Jpeg(jpeg) => Ok(jpeg.raw().context(error::JpegSnafu)?),
        }
    }

    /// Image XObject dictionary with the sample data attached.
    ///
    /// `palette` must reference the palette object of an indexed image.
    pub fn dictionary(&self, palette: Option<IndirectReference>) -> Result<Dictionary> {
        match self {
            ImageSource::Png(png) => Ok(png.dictionary(palette).context(error::PngSnafu)?),
            ImageSource::Jpeg(jpeg) => Ok(jpeg.dictionary().context(error::JpegSnafu)?),
        }
    }
}

/// An image registered under a resource label such as `I1`.
///
/// Content streams paint it with `/I1 Do`. The source is shared, so placing
/// the same picture on several pages decodes it once.
#[derive(Debug, Clone)]
pub struct XObject {
    label: SmolStr,
    source: Arc<ImageSource>,
}

impl XObject {
    pub fn new(label: impl Into<SmolStr>, source: ImageSource) -> Self {
        Self {
            label: label.into(),
            source: Arc::new(source),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    pub fn header(&self) -> Result<&Header> {
        Ok(&self.source.raw()?.header)
    }
}

impl PartialEq for XObject {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && (Arc::ptr_eq(&self.source, &other.source) || self.source == other.source)
    }
}

/// Entries shared by every image XObject.
fn xobject_dictionary(header: &Header) -> Dictionary {
    Dictionary::new()
        .with("Type", Name::from("XObject"))
        .with("Subtype", Name::from("Image"))
        .with("Width", header.width)
        .with("Height", header.height)
}

mod error {
    use snafu::Snafu;

    #[derive(Debug, Snafu)]
    #[snafu(visibility(pub(super)))]
    pub(super) enum Error {
        #[snafu(display("Invalid image format: neither a PNG nor a JPEG signature"))]
        UnknownFormat,

        #[snafu(display("Invalid PNG image"))]
        Png { source: super::png::Error },

        #[snafu(display("Invalid JPEG image"))]
        Jpeg { source: super::jpeg::Error },
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_format_by_signature() {
        assert!(matches!(
            ImageSource::from_bytes(fixtures::indexed_png()),
            Ok(ImageSource::Png(_))
        ));
        assert!(matches!(
            ImageSource::from_bytes(fixtures::jpeg(0xC0, 3)),
            Ok(ImageSource::Jpeg(_))
        ));
        assert!(ImageSource::from_bytes(b"GIF89a".to_vec()).is_err());
    }

    #[test]
    fn xobject_equality() -> std::result::Result<(), Error> {
        let first = XObject::new("I1", ImageSource::from_bytes(fixtures::jpeg(0xC0, 1))?);
        let shared = first.clone();
        let copy = XObject::new("I1", ImageSource::from_bytes(fixtures::jpeg(0xC0, 1))?);
        let other = XObject::new("I1", ImageSource::from_bytes(fixtures::jpeg(0xC0, 3))?);

        assert_eq!(first, shared);
        assert_eq!(first, copy);
        assert_ne!(first, other);
        assert_eq!(first.header()?.color_space, ColorSpace::DeviceGray);
        Ok(())
    }
}
