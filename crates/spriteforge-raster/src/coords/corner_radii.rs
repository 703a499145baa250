/// Per-corner radii for a rounded rectangle (pixels).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
/// Negative values are treated as zero by the rasterizer.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.top_left <= 0.0
            && self.top_right <= 0.0
            && self.bottom_right <= 0.0
            && self.bottom_left <= 0.0
    }

    /// Radii usable against a `width` × `height` rectangle: negatives become
    /// zero and each radius is capped at half the shorter side, so opposing
    /// corner zones can never overlap.
    pub fn clamped_to(self, width: f32, height: f32) -> Self {
        let cap = (width.min(height) / 2.0).max(0.0);
        let clamp = |r: f32| r.clamp(0.0, cap);
        Self {
            top_left: clamp(self.top_left),
            top_right: clamp(self.top_right),
            bottom_right: clamp(self.bottom_right),
            bottom_left: clamp(self.bottom_left),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_caps_at_half_shorter_side() {
        let r = CornerRadii::all(40.0).clamped_to(20.0, 100.0);
        assert_eq!(r, CornerRadii::all(10.0));
    }

    #[test]
    fn clamped_zeroes_negatives() {
        let r = CornerRadii::new(-3.0, 2.0, -1.0, 4.0).clamped_to(100.0, 100.0);
        assert_eq!(r, CornerRadii::new(0.0, 2.0, 0.0, 4.0));
    }

    #[test]
    fn is_zero_on_default() {
        assert!(CornerRadii::zero().is_zero());
        assert!(!CornerRadii::all(1.0).is_zero());
    }
}
