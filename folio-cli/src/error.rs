use std::path::PathBuf;

use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)), context(suffix(false)))]
pub enum Error {
    #[snafu(display("Failed to read {}", path.display()))]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to write {}", path.display()))]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Unsupported image {}", path.display()))]
    Image {
        path: PathBuf,
        source: folio_pdf::image::Error,
    },

    #[snafu(display("Invalid page rotation"))]
    Rotation { source: folio_pdf::structures::Error },

    #[snafu(display("Error writing PDF document"))]
    Pdf { source: folio_pdf::Error },

    #[snafu(display("Cannot derive an output name from {}", path.display()))]
    OutputName { path: PathBuf },

    #[snafu(display("Margins leave no room on the page"))]
    NoRoom,
}
