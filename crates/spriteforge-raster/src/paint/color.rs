/// Straight-alpha RGBA color.
///
/// Channels are `f32` in `[0, 1]`. Alpha 0 marks an erased/transparent pixel.
/// No premultiplication anywhere in the pipeline: the canvas stores straight
/// alpha and PNG export consumes it unchanged.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Creates a color from sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self::new(
            rgba[0] as f32 / 255.0,
            rgba[1] as f32 / 255.0,
            rgba[2] as f32 / 255.0,
            rgba[3] as f32 / 255.0,
        )
    }

    /// Quantizes to sRGB bytes, clamping each channel to `[0, 1]` first.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// True when this pixel counts as erased/empty content.
    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Channel-wise product, used for tinting.
    #[inline]
    pub fn modulate(self, other: Color) -> Color {
        Color::new(
            self.r * other.r,
            self.g * other.g,
            self.b * other.b,
            self.a * other.a,
        )
    }

    /// Clamps all channels to `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── byte conversion ───────────────────────────────────────────────────

    #[test]
    fn rgba8_round_trip_extremes() {
        assert_eq!(Color::white().to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(Color::transparent().to_rgba8(), [0, 0, 0, 0]);
        assert_eq!(Color::from_rgba8([255, 0, 0, 255]), Color::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn to_rgba8_rounds_to_nearest() {
        // 0.5 * 255 = 127.5 rounds up.
        assert_eq!(Color::new(0.5, 0.0, 0.0, 1.0).to_rgba8()[0], 128);
    }

    #[test]
    fn to_rgba8_clamps_out_of_range() {
        assert_eq!(Color::new(2.0, -1.0, 0.0, 1.0).to_rgba8(), [255, 0, 0, 255]);
    }

    // ── predicates ────────────────────────────────────────────────────────

    #[test]
    fn transparency_is_alpha_only() {
        assert!(Color::new(1.0, 1.0, 1.0, 0.0).is_transparent());
        assert!(!Color::new(0.0, 0.0, 0.0, 0.01).is_transparent());
    }

    // ── modulate ──────────────────────────────────────────────────────────

    #[test]
    fn modulate_scales_channels() {
        let tint = Color::new(0.5, 1.0, 0.0, 1.0);
        let out = Color::white().modulate(tint);
        assert_eq!(out, tint);
    }
}
