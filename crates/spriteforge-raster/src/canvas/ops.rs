//! Whole-canvas transforms used by the sprite pipeline.
//!
//! All operations sample per destination pixel and return a new canvas; the
//! source is never mutated. Samples falling outside the source are
//! transparent.

use crate::coords::Vec2;
use crate::paint::Color;

use super::Canvas;

impl Canvas {
    /// Nearest-neighbor resample to `width` × `height`.
    ///
    /// Zero target dimensions yield an empty canvas.
    pub fn resized(&self, width: u32, height: u32) -> Canvas {
        Canvas::from_fn(width, height, |x, y| {
            let sx = ((x as f32 / width as f32) * self.width() as f32).floor() as i32;
            let sy = ((y as f32 / height as f32) * self.height() as f32).floor() as i32;
            self.get(sx, sy).unwrap_or(Color::transparent())
        })
    }

    /// Rotates pixel content by `degrees` around the buffer center.
    ///
    /// Dimensions are unchanged; content rotated past the edges is lost, and
    /// uncovered pixels become transparent. Each destination pixel samples the
    /// nearest source pixel at its rotated position.
    pub fn rotated(&self, degrees: f32) -> Canvas {
        let radians = degrees.to_radians();
        let pivot = Vec2::new((self.width() / 2) as f32, (self.height() / 2) as f32);
        Canvas::from_fn(self.width(), self.height(), |x, y| {
            let src = Vec2::new(x as f32, y as f32).rotated_about(pivot, radians);
            self.get(src.x.round() as i32, src.y.round() as i32)
                .unwrap_or(Color::transparent())
        })
    }

    /// Mirrors columns left-to-right.
    pub fn flipped_horizontal(&self) -> Canvas {
        Canvas::from_fn(self.width(), self.height(), |x, y| {
            self.get((self.width() - 1 - x) as i32, y as i32)
                .unwrap_or(Color::transparent())
        })
    }

    /// Channel-wise multiply of every pixel by `tint`.
    pub fn tinted(&self, tint: Color) -> Canvas {
        Canvas::from_fn(self.width(), self.height(), |x, y| {
            self.get(x as i32, y as i32)
                .unwrap_or(Color::transparent())
                .modulate(tint)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::new(1.0, 0.0, 0.0, 1.0)
    }

    // ── resized ───────────────────────────────────────────────────────────

    #[test]
    fn resized_doubles_into_blocks() {
        let mut src = Canvas::new(2, 1);
        src.set(1, 0, red());

        let out = src.resized(4, 2);
        assert_eq!(out.width(), 4);
        assert_eq!(out.height(), 2);
        // Left half stays transparent, right half carries the source pixel.
        assert_eq!(out.get(1, 1), Some(Color::transparent()));
        assert_eq!(out.get(2, 0), Some(red()));
        assert_eq!(out.get(3, 1), Some(red()));
    }

    #[test]
    fn resized_to_zero_is_empty() {
        let src = Canvas::new(4, 4);
        assert!(src.resized(0, 4).is_empty());
    }

    // ── rotated ───────────────────────────────────────────────────────────

    #[test]
    fn rotated_zero_degrees_is_identity() {
        let mut src = Canvas::new(5, 5);
        src.set(1, 3, red());
        assert_eq!(src.rotated(0.0), src);
    }

    #[test]
    fn rotated_quarter_turn_moves_content() {
        let mut src = Canvas::new(5, 5);
        src.set(4, 2, red());

        // Destination (2, 0) samples the source at +90° about (2, 2): exactly (4, 2).
        let out = src.rotated(90.0);
        assert_eq!(out.get(2, 0), Some(red()));
        assert_eq!(out.get(4, 2), Some(Color::transparent()));
    }

    #[test]
    fn rotated_preserves_dimensions() {
        let src = Canvas::new(7, 3);
        let out = src.rotated(33.0);
        assert_eq!((out.width(), out.height()), (7, 3));
    }

    // ── flipped_horizontal ────────────────────────────────────────────────

    #[test]
    fn flip_mirrors_columns() {
        let mut src = Canvas::new(3, 1);
        src.set(0, 0, red());

        let out = src.flipped_horizontal();
        assert_eq!(out.get(2, 0), Some(red()));
        assert_eq!(out.get(0, 0), Some(Color::transparent()));
    }

    #[test]
    fn double_flip_is_identity() {
        let mut src = Canvas::new(4, 2);
        src.set(1, 1, red());
        assert_eq!(src.flipped_horizontal().flipped_horizontal(), src);
    }

    // ── tinted ────────────────────────────────────────────────────────────

    #[test]
    fn tint_modulates_channels() {
        let mut src = Canvas::new(1, 1);
        src.set(0, 0, Color::white());

        let out = src.tinted(Color::new(0.5, 0.25, 1.0, 1.0));
        assert_eq!(out.get(0, 0), Some(Color::new(0.5, 0.25, 1.0, 1.0)));
    }

    #[test]
    fn tint_leaves_transparent_pixels_transparent() {
        let src = Canvas::new(2, 2);
        let out = src.tinted(red());
        assert_eq!(out.content_len(), 0);
    }
}
