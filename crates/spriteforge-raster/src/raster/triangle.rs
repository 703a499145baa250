use crate::canvas::Canvas;
use crate::coords::Vec2;
use crate::paint::Brush;
use crate::shape::TriangleShape;

/// Fills a triangle via barycentric containment against its (rotated)
/// vertices. Every canvas pixel is classified; covered pixels get the brush
/// pixel, the rest are untouched.
pub(crate) fn fill(canvas: &mut Canvas, shape: &TriangleShape, brush: Brush) {
    if shape.is_degenerate() {
        log::debug!("skipping degenerate triangle {}x{}", shape.base, shape.height);
        return;
    }

    let [apex, left, right] = shape.vertices();
    let pixel = brush.pixel();

    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let p = Vec2::new(x as f32, y as f32);
            if let Some((u, v, w)) = barycentric(p, apex, left, right) {
                if u >= 0.0 && v >= 0.0 && w >= 0.0 {
                    canvas.set(x as i32, y as i32, pixel);
                }
            }
        }
    }
}

/// Weights of `p` relative to triangle `(a, b, c)`; `None` for a degenerate
/// (zero-area) triangle. The weights always sum to 1.
pub(crate) fn barycentric(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> Option<(f32, f32, f32)> {
    let denom = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    let u = ((b.y - c.y) * (p.x - c.x) + (c.x - b.x) * (p.y - c.y)) / denom;
    let v = ((c.y - a.y) * (p.x - c.x) + (a.x - c.x) * (p.y - c.y)) / denom;
    Some((u, v, 1.0 - u - v))
}
