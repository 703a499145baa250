use super::Color;

/// Fill source for rasterization: a solid color plus an eraser flag.
///
/// An erasing brush writes fully transparent pixels regardless of its color,
/// so erasing and painting with a zero-alpha color are the same operation.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Brush {
    pub color: Color,
    pub erase: bool,
}

impl Brush {
    #[inline]
    pub const fn solid(color: Color) -> Self {
        Self { color, erase: false }
    }

    #[inline]
    pub const fn eraser() -> Self {
        Self { color: Color::transparent(), erase: true }
    }

    /// The pixel value this brush writes into covered pixels.
    #[inline]
    pub fn pixel(self) -> Color {
        if self.erase || self.color.is_transparent() {
            Color::transparent()
        } else {
            self.color
        }
    }
}
