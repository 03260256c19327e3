//! Reader for content streams.
//!
//! Content streams are sequences of operands followed by an operator, in
//! postfix order: `/F1 12 Tf` sets the font, `(Hi) Tj` shows text. The
//! reader turns a stream into [`Operation`]s that remember the byte range
//! they were read from, so a stream can be rewritten by splicing only the
//! operations that change and copying everything else verbatim.

mod array;
mod name;
mod numeric;
mod operation;
mod string;
mod whitespace;

use snafu::Snafu;

pub use operation::{Operand, Operation};

#[derive(Debug, Snafu)]
pub struct Error(error::Error);
type Result<T> = std::result::Result<T, Error>;

/// Splits a content stream into operations.
///
/// Whitespace and comments between tokens are skipped. Operands that are
/// not followed by an operator, or bytes that start no known token, are
/// reported with their offset.
pub fn operations(stream: &[u8]) -> Result<Vec<Operation>> {
    let result = operation::operations(stream)?;
    tracing::trace!(count = result.len(), "read content stream");
    Ok(result)
}

mod error {
    use snafu::Snafu;

    #[derive(Debug, Snafu)]
    #[snafu(visibility(pub(crate)))]
    pub(crate) enum Error {
        #[snafu(display("Malformed content stream: unexpected data at offset {offset}"))]
        UnexpectedToken { offset: usize },

        #[snafu(display("Malformed content stream: operands without operator at offset {offset}"))]
        DanglingOperands { offset: usize },
    }
}
