use snafu::ResultExt;

use crate::{
    Result, error,
    structures::{Catalog, Context, Information, Pages, Version},
    types::Dictionary,
};

/// Binary comment written after the header line, so transfer tools treat
/// the file as binary.
pub const BINARY_MARKER: [u8; 13] = [
    0x25, 0xC4, 0xE5, 0xF2, 0xE5, 0xEB, 0xA7, 0xF3, 0xA0, 0xD0, 0xC4, 0xC6, 0x0A,
];

/// A complete document, ready to be written.
///
/// Building a document never numbers anything; numbers are issued by
/// [`Document::as_bytes`], in the order Information, Catalog, page tree,
/// then each page followed by its resources and contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    version: Version,
    information: Information,
    catalog: Catalog,
}

impl Document {
    pub fn new(pages: Pages) -> Self {
        Self {
            version: Version::default(),
            information: Information::default(),
            catalog: Catalog::new(pages),
        }
    }

    pub fn with_version(&self, version: Version) -> Self {
        Self {
            version,
            ..self.clone()
        }
    }

    pub fn with_information(&self, information: Information) -> Self {
        Self {
            information,
            ..self.clone()
        }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn information(&self) -> &Information {
        &self.information
    }

    pub fn pages(&self) -> &Pages {
        self.catalog.pages()
    }

    /// Serializes the whole document.
    ///
    /// Each call numbers the objects afresh, starting at 1.
    pub fn as_bytes(&self) -> Result<Vec<u8>> {
        let mut context = Context::new();

        let information = self.information.indirect(&mut context);
        let catalog = self
            .catalog
            .indirect(&mut context)
            .context(error::Structure)?;

        let trailer = Dictionary::new()
            .with("Root", catalog.reference().context(error::Shape)?)
            .with("Size", context.value())
            .with("Info", information.reference().context(error::Shape)?);

        let mut result = self.version.header().into_bytes();
        result.extend_from_slice(&BINARY_MARKER);
        result.extend(information.as_bytes());
        result.extend(catalog.as_bytes());
        result.extend_from_slice(format!("trailer {trailer}\n%%EOF").as_bytes());

        tracing::debug!(
            objects = information.count() + catalog.count(),
            pages = self.pages().len(),
            bytes = result.len(),
            "serialized document"
        );

        Ok(result)
    }
}
