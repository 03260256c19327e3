use std::sync::OnceLock;

use nom::{IResult, Parser, bytes::complete::take, number::complete as number};
use snafu::{OptionExt, Snafu, ensure};

use crate::{
    image::{ColorSpace, Header, RawImage, xobject_dictionary},
    types::{Array, Dictionary, IndirectReference, Name, Object},
};

#[derive(Debug, Snafu)]
pub struct Error(error::Error);
type Result<T> = std::result::Result<T, Error>;

pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// PNG source bytes, decoded on first access.
///
/// Decoding validates the header and collects the still compressed `IDAT`
/// payloads and the `PLTE` palette. The samples themselves are never
/// inflated: PDF readers undo the PNG row filters through the `/Predictor`
/// decode parameter.
#[derive(Debug, Clone)]
pub struct Png {
    bytes: Vec<u8>,
    raw: OnceLock<RawImage>,
}

#[derive(Debug)]
struct Chunk<'a> {
    kind: &'a [u8],
    data: &'a [u8],
}

impl Png {
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
            depth = raw.header.depth,
            color_space = raw.header.color_space.as_str(),
            "decoded PNG image"
        );

        Ok(self.raw.get_or_init(|| raw))
    }

    pub fn header(&self) -> Result<&Header> {
        Ok(&self.raw()?.header)
    }

    pub fn body(&self) -> Result<&[u8]> {
        Ok(&self.raw()?.body)
    }

    pub fn palette(&self) -> Result<&[u8]> {
        Ok(&self.raw()?.palette)
    }

    /// Image XObject dictionary carrying the `IDAT` data.
    ///
    /// Alpha channels are not modeled: gray+alpha and RGBA images are
    /// described as their plain counterparts.
    pub fn dictionary(&self, palette: Option<IndirectReference>) -> Result<Dictionary> {
        let raw = self.raw()?;
        let header = &raw.header;

        let color_space: Object = match header.color_space {
            ColorSpace::Indexed => {
                let palette = palette.context(error::PaletteNotNumberedSnafu)?;
                let hival = raw.palette.len() / 3 - 1;

                Array::new()
                    .with(Name::from("Indexed"))
                    .with(Name::from("DeviceRGB"))
                    .with(hival)
                    .with(palette)
                    .into()
            }
            other => Name::from(other.as_str()).into(),
        };

        let decode_parms = Dictionary::new()
            .with("Predictor", 15i64)
            .with("Colors", u32::from(header.color_space.colors()))
            .with("BitsPerComponent", u32::from(header.depth))
            .with("Columns", header.width);

        Ok(xobject_dictionary(header)
            .with("ColorSpace", color_space)
            .with("BitsPerComponent", u32::from(header.depth))
            .with("Filter", Name::from("FlateDecode"))
            .with("DecodeParms", decode_parms)
            .with("Mask", Array::new().with(0i64).with(0i64))
            .with_stream(raw.body.clone()))
    }
}

impl PartialEq for Png {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

/// Reads one chunk: length, type, payload and the (unchecked) CRC.
fn chunk(input: &[u8]) -> IResult<&[u8], Chunk<'_>> {
    let (input, length) = number::be_u32(input)?;
    let (input, kind) = take(4usize).parse(input)?;
    let (input, data) = take(length as usize).parse(input)?;
    let (input, _crc) = take(4usize).parse(input)?;

    Ok((input, Chunk { kind, data }))
}

fn header(data: &[u8]) -> Result<Header> {
    let (_, (width, height, depth, color, compression, filter, interlace)) = (
        number::be_u32,
        number::be_u32,
        number::u8,
        number::u8,
        number::u8,
        number::u8,
        number::u8,
    )
        .parse(data)
        .map_err(|_: nom::Err<nom::error::Error<&[u8]>>| error::Error::TruncatedHeader)?;

    ensure!(
        width > 0 && height > 0,
        error::InvalidDimensionsSnafu { width, height }
    );
    ensure!(
        matches!(depth, 1 | 2 | 4 | 8),
        error::UnsupportedDepthSnafu { depth }
    );
    ensure!(
        compression == 0,
        error::UnsupportedMethodSnafu {
            method: "compression",
            value: compression
        }
    );
    ensure!(
        filter == 0,
        error::UnsupportedMethodSnafu {
            method: "filter",
            value: filter
        }
    );
    ensure!(
        interlace == 0,
        error::UnsupportedMethodSnafu {
            method: "interlace",
            value: interlace
        }
    );

    let color_space = match color {
        0 | 4 => ColorSpace::DeviceGray,
        2 | 6 => ColorSpace::DeviceRgb,
        3 => ColorSpace::Indexed,
        _ => return Err(error::Error::UnsupportedColorType { color }.into()),
    };

    Ok(Header {
        width,
        height,
        depth,
        color_space,
    })
}

fn decode(bytes: &[u8]) -> Result<RawImage> {
    let input = bytes
        .strip_prefix(&SIGNATURE[..])
        .context(error::BadSignatureSnafu)?;

    let (mut input, first) = chunk(input).map_err(|_| error::Error::TruncatedChunk {
        offset: SIGNATURE.len(),
    })?;
    ensure!(first.kind == b"IHDR", error::MissingHeaderSnafu);

    let header = header(first.data)?;
    let mut body = Vec::new();
    let mut palette = Vec::new();

    while !input.is_empty() {
        let offset = bytes.len() - input.len();
        let (rest, chunk) =
            chunk(input).map_err(|_| error::Error::TruncatedChunk { offset })?;
        input = rest;

        match chunk.kind {
            b"IDAT" => body.extend_from_slice(chunk.data),
            b"PLTE" => palette = chunk.data.to_vec(),
            b"IEND" => break,
            _ => tracing::trace!(
                kind = %String::from_utf8_lossy(chunk.kind),
                "skipping PNG chunk"
            ),
        }
    }

    if header.color_space == ColorSpace::Indexed {
        ensure!(!palette.is_empty(), error::MissingPaletteSnafu);
        ensure!(
            palette.len() % 3 == 0,
            error::InvalidPaletteSnafu {
                length: palette.len()
            }
        );
    }

    Ok(RawImage {
        header,
        body,
        palette,
    })
}

mod error {
    use snafu::Snafu;

    #[derive(Debug, Snafu)]
    #[snafu(visibility(pub(super)))]
    pub(super) enum Error {
        #[snafu(display("Invalid image format: bad PNG signature"))]
        BadSignature,

        #[snafu(display("Invalid image format: first chunk is not IHDR"))]
        MissingHeader,

        #[snafu(display("Invalid image format: IHDR chunk is truncated"))]
        TruncatedHeader,

        #[snafu(display("Invalid image format: truncated chunk at offset {offset}"))]
        TruncatedChunk { offset: usize },

        #[snafu(display("Invalid image format: empty image {width}x{height}"))]
        InvalidDimensions { width: u32, height: u32 },

        #[snafu(display("Invalid image format: unsupported bit depth {depth}"))]
        UnsupportedDepth { depth: u8 },

        #[snafu(display("Invalid image format: unsupported color type {color}"))]
        UnsupportedColorType { color: u8 },

        #[snafu(display("Invalid image format: unsupported {method} method {value}"))]
        UnsupportedMethod { method: &'static str, value: u8 },

        #[snafu(display("Invalid image format: indexed image without palette"))]
        MissingPalette,

        #[snafu(display("Invalid image format: palette of {length} bytes is not a list of RGB triples"))]
        InvalidPalette { length: usize },

        #[snafu(display("Indexed image needs a numbered palette object"))]
        PaletteNotNumbered,
    }
}
