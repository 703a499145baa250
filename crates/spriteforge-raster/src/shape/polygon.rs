use crate::coords::{Rect, Vec2};

/// Closed polygon from an ordered vertex sequence (e.g. a freehand outline).
///
/// The last vertex connects back to the first; self-intersection is allowed
/// and resolved by the even-odd fill rule.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    pub points: Vec<Vec2>,
}

impl PolygonShape {
    #[inline]
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Fewer than 3 vertices cannot enclose any pixel.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    /// Bounding box of the vertex set. `None` when there are no points.
    #[inline]
    pub fn bounds(&self) -> Option<Rect> {
        Rect::from_points(&self.points)
    }

    /// Canvas large enough to hold every vertex at its original coordinates,
    /// including the rounding slack at the right/bottom edge.
    pub fn canvas_size(&self) -> (u32, u32) {
        match self.bounds() {
            Some(b) => {
                let max = b.max();
                (
                    (max.x.max(0.0).ceil() as u32).saturating_add(1),
                    (max.y.max(0.0).ceil() as u32).saturating_add(1),
                )
            }
            None => (0, 0),
        }
    }
}
