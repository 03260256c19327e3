//! The document tree: catalog, page tree, pages, resources and metadata.
//!
//! Serialization is a single depth-first pass. Every node takes its own
//! object number from the [`Context`] before numbering its children, so a
//! child can embed its parent's reference (`/Parent`) and the body lists
//! objects in the order their numbers were issued.

mod catalog;
mod context;
mod contents;
mod info;
mod page;
mod pages;
mod resources;
mod version;

use snafu::Snafu;

pub use catalog::Catalog;
pub use context::Context;
pub use contents::Contents;
pub use info::{Information, Trap};
pub use page::{Page, PageNode, Rotated, Rotation};
pub use pages::Pages;
pub use resources::{Resource, Resources};
pub use version::Version;

pub use version::Error as VersionError;

#[derive(Debug, Snafu)]
pub struct Error(error::Error);
type Result<T> = std::result::Result<T, Error>;

mod error {
    use snafu::Snafu;

    use crate::{content, image, types::IndirectError};

    #[derive(Debug, Snafu)]
    #[snafu(visibility(pub(super)))]
    pub(super) enum Error {
        #[snafu(display("Resource label /{label} names two different resources"))]
        LabelConflict { label: String },

        #[snafu(display("Failed to embed image /{label}"))]
        Image { label: String, source: image::Error },

        #[snafu(display("Failed to render page content"))]
        Content { source: content::Error },

        #[snafu(display("Document node has the wrong shape"))]
        Shape { source: IndirectError },

        #[snafu(display("Rotation must be 90, 180 or 270 degrees, got {degrees}"))]
        InvalidRotation { degrees: i64 },
    }
}
