use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use spriteforge_raster::canvas::Canvas;
use spriteforge_raster::paint::Color;

use crate::error::ExportError;

/// Encodes a canvas to PNG bytes (RGBA8, straight alpha).
///
/// A zero-sized canvas encodes as a 1×1 transparent image so that degenerate
/// geometry never turns into a codec failure.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, ExportError> {
    let image = if canvas.is_empty() {
        RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 0]))
    } else {
        RgbaImage::from_fn(canvas.width(), canvas.height(), |x, y| {
            let px = canvas.get(x as i32, y as i32).unwrap_or(Color::transparent());
            Rgba(px.to_rgba8())
        })
    };

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Encodes `canvas` and writes the PNG to `path` in a single write.
///
/// On failure no output file is left behind (there is no partial-write
/// recovery to do: either `fs::write` creates the full file or it errors
/// before creating one).
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<(), ExportError> {
    let bytes = encode_png(canvas)?;
    fs::write(path, bytes)?;
    log::info!("wrote {}x{} sprite to {}", canvas.width(), canvas.height(), path.display());
    Ok(())
}

/// Decodes a PNG file back into a canvas (any color type is converted to
/// straight-alpha RGBA).
pub fn read_png(path: &Path) -> Result<Canvas, ExportError> {
    let image = image::open(path)?.to_rgba8();
    Ok(Canvas::from_fn(image.width(), image.height(), |x, y| {
        Color::from_rgba8(image.get_pixel(x, y).0)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    fn red() -> Color {
        Color::new(1.0, 0.0, 0.0, 1.0)
    }

    // ── encode ────────────────────────────────────────────────────────────

    #[test]
    fn encoded_bytes_start_with_png_signature() {
        let bytes = encode_png(&Canvas::new(2, 2)).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[test]
    fn zero_sized_canvas_encodes_as_one_by_one() {
        let bytes = encode_png(&Canvas::new(0, 0)).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (1, 1));
    }

    #[test]
    fn encode_preserves_pixel_values() {
        let mut canvas = Canvas::new(3, 2);
        canvas.set(2, 1, red());

        let bytes = encode_png(&canvas).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(2, 1).0, [255, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    // ── file round trip ───────────────────────────────────────────────────

    #[test]
    fn write_then_read_round_trips() {
        let path = std::env::temp_dir().join("spriteforge-codec-roundtrip.png");
        let mut canvas = Canvas::new(4, 4);
        canvas.set(1, 2, red());

        write_png(&canvas, &path).unwrap();
        let back = read_png(&path).unwrap();

        assert_eq!((back.width(), back.height()), (4, 4));
        assert_eq!(back.get(1, 2), Some(red()));
        assert_eq!(back.content_len(), 1);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn read_of_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("spriteforge-codec-missing.png");
        assert!(read_png(&path).is_err());
    }
}
