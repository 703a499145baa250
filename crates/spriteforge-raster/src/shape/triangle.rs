use crate::coords::Vec2;

/// Isosceles triangle: apex centered over a horizontal base, optionally
/// rotated.
///
/// The triangle sits in a padded square canvas sized so that every rotation
/// angle keeps all three vertices inside the buffer; rotation is applied
/// about the center of that square.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TriangleShape {
    pub base: u32,
    pub height: u32,
    pub rotation_deg: f32,
}

impl TriangleShape {
    #[inline]
    pub const fn new(base: u32, height: u32, rotation_deg: f32) -> Self {
        Self { base, height, rotation_deg }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.base == 0 || self.height == 0
    }

    /// Side of the square canvas holding the triangle under any rotation:
    /// ceil(max(base, height) · √2).
    #[inline]
    pub fn canvas_side(&self) -> u32 {
        (self.base.max(self.height) as f32 * std::f32::consts::SQRT_2).ceil() as u32
    }

    /// The three vertices — apex, base-left, base-right — after rotation
    /// about the canvas center.
    pub fn vertices(&self) -> [Vec2; 3] {
        let base = self.base as f32;
        let height = self.height as f32;
        let half = self.canvas_side() as f32 / 2.0;
        let pivot = Vec2::new(half, half);
        let radians = self.rotation_deg.to_radians();

        [
            Vec2::new(base / 2.0, height).rotated_about(pivot, radians),
            Vec2::new(0.0, 0.0).rotated_about(pivot, radians),
            Vec2::new(base, 0.0).rotated_about(pivot, radians),
        ]
    }
}
