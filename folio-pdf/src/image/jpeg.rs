use std::sync::OnceLock;

use nom::{IResult, Parser, number::complete as number};
use snafu::{Snafu, ensure};

use crate::{
    image::{ColorSpace, Header, RawImage, xobject_dictionary},
    types::{Dictionary, Name},
};

#[derive(Debug, Snafu)]
pub struct Error(error::Error);
type Result<T> = std::result::Result<T, Error>;

/// Start-of-image marker followed by the first byte of the next marker.
pub const SOI: [u8; 3] = [0xFF, 0xD8, 0xFF];

const JFIF: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xE0];
const JFIF_IDENTIFIER: &[u8] = b"JFIF\0";

const BASELINE: [u8; 2] = [0xFF, 0xC0];
const PROGRESSIVE: [u8; 2] = [0xFF, 0xC2];

/// JPEG source bytes.
///
/// The file is embedded untouched (PDF decodes it with `/DCTDecode`), so
/// decoding only reads the frame header for the geometry.
#[derive(Debug, Clone)]
pub struct Jpeg {
    bytes: Vec<u8>,
    raw: OnceLock<RawImage>,
}

impl Jpeg {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            raw: OnceLock::new(),
        }
    }

    pub fn raw(&self) -> Result<&RawImage> {
        if let Some(raw) = self.raw.get() {
            return Ok(raw);
        }

        let raw = decode(&self.bytes)?;
        tracing::debug!(
            width = raw.header.width,
            height = raw.header.height,
            color_space = raw.header.color_space.as_str(),
            "decoded JPEG image"
        );

        Ok(self.raw.get_or_init(|| raw))
    }

    pub fn header(&self) -> Result<&Header> {
        Ok(&self.raw()?.header)
    }

    pub fn dictionary(&self) -> Result<Dictionary> {
        let raw = self.raw()?;
        let header = &raw.header;

        Ok(xobject_dictionary(header)
            .with("ColorSpace", Name::from(header.color_space.as_str()))
            .with("BitsPerComponent", u32::from(header.depth))
            .with("Filter", Name::from("DCTDecode"))
            .with_stream(raw.body.clone()))
    }
}

impl PartialEq for Jpeg {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

struct Frame {
    precision: u8,
    height: u16,
    width: u16,
    components: u8,
}

/// Reads a start-of-frame segment, marker excluded.
fn frame(input: &[u8]) -> IResult<&[u8], Frame> {
    let (input, (_length, precision, height, width, components)) = (
        number::be_u16,
        number::u8,
        number::be_u16,
        number::be_u16,
        number::u8,
    )
        .parse(input)?;

    Ok((
        input,
        Frame {
            precision,
            height,
            width,
            components,
        },
    ))
}

fn position(haystack: &[u8], needle: &[u8; 2]) -> Option<usize> {
    haystack.windows(2).position(|window| window == needle)
}

fn decode(bytes: &[u8]) -> Result<RawImage> {
    ensure!(
        bytes.starts_with(&JFIF)
            && bytes.get(6..11).is_some_and(|id| id == JFIF_IDENTIFIER),
        error::NotJfifSnafu
    );

    let baseline = position(bytes, &BASELINE);
    let progressive = position(bytes, &PROGRESSIVE);

    let start = match (baseline, progressive) {
        (Some(baseline), Some(progressive)) if progressive < baseline => {
            return Err(error::Error::Progressive.into());
        }
        (Some(baseline), _) => baseline,
        (None, Some(_)) => return Err(error::Error::Progressive.into()),
        (None, None) => return Err(error::Error::MissingFrame.into()),
    };

    let (_, frame) = frame(&bytes[start + BASELINE.len()..])
        .map_err(|_| error::Error::TruncatedFrame { offset: start })?;

    let color_space = match frame.components {
        1 => ColorSpace::DeviceGray,
        3 => ColorSpace::DeviceRgb,
        4 => ColorSpace::DeviceCmyk,
        components => return Err(error::Error::UnsupportedComponents { components }.into()),
    };

    ensure!(
        frame.precision == 8,
        error::UnsupportedPrecisionSnafu {
            precision: frame.precision
        }
    );
    ensure!(
        frame.width > 0 && frame.height > 0,
        error::InvalidDimensionsSnafu {
            width: frame.width,
            height: frame.height
        }
    );

    Ok(RawImage {
        header: Header {
            width: u32::from(frame.width),
            height: u32::from(frame.height),
            depth: frame.precision,
            color_space,
        },
        body: bytes.to_vec(),
        palette: Vec::new(),
    })
}

mod error {
    use snafu::Snafu;

    #[derive(Debug, Snafu)]
    #[snafu(visibility(pub(super)))]
    pub(super) enum Error {
        #[snafu(display("Invalid image format: not a JFIF file"))]
        NotJfif,

        #[snafu(display("Invalid image format: progressive JPEG is not supported"))]
        Progressive,

        #[snafu(display("Invalid image format: no baseline frame header"))]
        MissingFrame,

        #[snafu(display("Invalid image format: truncated frame header at offset {offset}"))]
        TruncatedFrame { offset: usize },

        #[snafu(display("Invalid image format: empty image {width}x{height}"))]
        InvalidDimensions { width: u16, height: u16 },

        #[snafu(display("Invalid image format: {precision} bit samples, only 8 bit is supported"))]
        UnsupportedPrecision { precision: u8 },

        #[snafu(display("Invalid image format: unsupported component count {components}"))]
        UnsupportedComponents { components: u8 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::image::fixtures;

    #[test]
    fn test_color_spaces() -> std::result::Result<(), Error> {
        struct TestCase {
            components: u8,
            expected: ColorSpace,
        }

        let test_cases = [
            TestCase {
                components: 1,
                expected: ColorSpace::DeviceGray,
            },
            TestCase {
                components: 3,
                expected: ColorSpace::DeviceRgb,
            },
            TestCase {
                components: 4,
                expected: ColorSpace::DeviceCmyk,
            },
        ];

        for case in &test_cases {
            let jpeg = Jpeg::new(fixtures::jpeg(0xC0, case.components));
            let header = jpeg.header()?;

            assert_eq!(header.color_space, case.expected);
            assert_eq!(header.width, 104);
            assert_eq!(header.height, 71);
            assert_eq!(header.depth, 8);
        }

        Ok(())
    }

    #[test]
    fn embeds_whole_file() -> std::result::Result<(), Error> {
        let bytes = fixtures::jpeg(0xC0, 3);
        let jpeg = Jpeg::new(bytes.clone());

        let dictionary = jpeg.dictionary()?;
        assert_eq!(
            dictionary.to_string(),
            format!(
                "<< /Type /XObject /Subtype /Image /Width 104 /Height 71 \
                 /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /DCTDecode /Length {} >>",
                bytes.len()
            )
        );
        assert_eq!(
            dictionary.stream().map(|stream| stream.as_bytes()),
            Some(bytes.as_slice())
        );
        Ok(())
    }

    #[test]
    fn test_invalid_images() {
        struct TestCase {
            name: &'static str,
            input: Vec<u8>,
        }

        let test_cases = [
            TestCase {
                name: "progressive",
                input: fixtures::jpeg(0xC2, 3),
            },
            TestCase {
                name: "no frame header",
                input: fixtures::jpeg(0xC4, 3),
            },
            TestCase {
                name: "two components",
                input: fixtures::jpeg(0xC0, 2),
            },
            TestCase {
                name: "12 bit samples",
                input: {
                    let mut input = fixtures::jpeg(0xC0, 3);
                    // precision follows the marker and the segment length
                    let start = position(&input, &BASELINE).unwrap_or_default();
                    input[start + 4] = 12;
                    input
                },
            },
            TestCase {
                name: "missing JFIF identifier",
                input: {
                    let mut input = fixtures::jpeg(0xC0, 3);
                    input[6] = b'E';
                    input
                },
            },
            TestCase {
                name: "truncated frame",
                input: {
                    let mut input = fixtures::jpeg(0xC0, 3);
                    let start = position(&input, &BASELINE).unwrap_or_default();
                    input.truncate(start + 5);
                    input
                },
            },
        ];

        for case in &test_cases {
            let result = Jpeg::new(case.input.clone()).raw().map(|_| ());
            assert!(
                result.is_err(),
                "Test '{}' failed: expected an error",
                case.name
            );
        }
    }
}
