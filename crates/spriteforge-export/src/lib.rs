//! Canvas export pipeline.
//!
//! Responsibilities:
//! - crop a canvas to its non-transparent content
//! - integer nearest-neighbor upscaling
//! - PNG encode/decode and file output
//!
//! The pipeline runs crop → upscale → encode; each stage is also usable on
//! its own. Geometry degeneracies never fail the pipeline — only the codec
//! and file I/O produce hard errors.

mod codec;
mod crop;
mod error;
mod scale;

pub use codec::{encode_png, read_png, write_png};
pub use crop::{content_bounds, crop_to_content};
pub use error::ExportError;
pub use scale::upscale;

use std::borrow::Cow;
use std::path::Path;

use spriteforge_raster::canvas::Canvas;
use spriteforge_raster::paint::Brush;
use spriteforge_raster::raster::rasterize;
use spriteforge_raster::shape::Shape;

/// Post-processing applied before encoding.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExportOptions {
    /// Crop to the minimal box containing any non-transparent pixel.
    pub crop: bool,
    /// Integer nearest-neighbor upscale factor; 0 and 1 are identity.
    pub scale: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { crop: true, scale: 1 }
    }
}

/// Runs the full pipeline on an already-filled canvas and writes the PNG to
/// `path`.
pub fn export_canvas(canvas: &Canvas, options: ExportOptions, path: &Path) -> Result<(), ExportError> {
    let canvas = if options.crop {
        Cow::Owned(crop_to_content(canvas))
    } else {
        Cow::Borrowed(canvas)
    };
    let canvas = if options.scale > 1 {
        Cow::Owned(upscale(&canvas, options.scale))
    } else {
        canvas
    };
    write_png(&canvas, path)
}

/// Rasterizes `shape` with `brush` and exports the result to `path`.
pub fn export_shape(
    shape: &Shape,
    brush: Brush,
    options: ExportOptions,
    path: &Path,
) -> Result<(), ExportError> {
    export_canvas(&rasterize(shape, brush), options, path)
}
