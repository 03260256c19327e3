//! Write-only PDF engine.
//!
//! A [`Document`] is built from a tree of pages holding text and image
//! contents, then serialized in one pass by [`Document::as_bytes`].

pub mod content;
pub mod document;
pub mod font;
pub mod format;
pub mod id;
pub mod image;
pub mod parser;
pub mod structures;
pub mod text;
pub mod types;

pub use content::Content;
pub use document::Document;
pub use font::{Base14, Font};
pub use format::{Margins, PageFormat};
pub use image::{ImageSource, XObject};
pub use structures::{Information, Page, PageNode, Pages, Rotation, Version};

#[derive(Debug, snafu::Snafu)]
pub struct Error(error::Error);
pub type Result<T> = std::result::Result<T, Error>;

mod error {
    use snafu::Snafu;

    use crate::{structures, types::IndirectError};

    #[derive(Debug, Snafu)]
    #[snafu(visibility(pub(crate)), context(suffix(false)))]
    pub(crate) enum Error {
        #[snafu(display("Failed to serialize document"))]
        Structure { source: structures::Error },

        #[snafu(display("Document root has the wrong shape"))]
        Shape { source: IndirectError },
    }
}
