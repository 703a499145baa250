use std::io;

use thiserror::Error;

/// Errors surfaced by the export pipeline.
///
/// Degenerate geometry is handled upstream as a no-op; only encoding and
/// file I/O fail hard. A failed write leaves no output file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("png codec error: {0}")]
    Codec(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
