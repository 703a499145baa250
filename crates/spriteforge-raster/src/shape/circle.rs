use crate::coords::Vec2;

/// Filled circle around an integer-truncated center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleShape {
    pub center: Vec2,
    pub radius: f32,
}

impl CircleShape {
    #[inline]
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// A circle through `edge`, the way a click-drag gesture defines one.
    #[inline]
    pub fn from_drag(center: Vec2, edge: Vec2) -> Self {
        Self::new(center, center.distance(edge))
    }

    /// Non-positive radii fill nothing.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.radius > 0.0)
    }

    /// Canvas large enough to hold the circle at its original center.
    pub fn canvas_size(&self) -> (u32, u32) {
        if self.is_degenerate() {
            return (0, 0);
        }
        let w = (self.center.x + self.radius).max(0.0).ceil() as u32 + 1;
        let h = (self.center.y + self.radius).max(0.0).ceil() as u32 + 1;
        (w, h)
    }
}
