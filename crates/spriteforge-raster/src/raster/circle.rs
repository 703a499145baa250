use crate::canvas::Canvas;
use crate::paint::Brush;
use crate::shape::CircleShape;

/// Fills a circle by scanning its bounding square and testing squared
/// distance against radius², boundary inclusive. The center is truncated to
/// integer pixel coordinates before the scan.
pub(crate) fn fill(canvas: &mut Canvas, shape: &CircleShape, brush: Brush) {
    if shape.is_degenerate() {
        log::debug!("skipping degenerate circle with radius {}", shape.radius);
        return;
    }

    let cx = shape.center.x as i32;
    let cy = shape.center.y as i32;
    let radius = shape.radius;
    let reach = radius.ceil() as i32;
    let pixel = brush.pixel();

    for dy in -reach..=reach {
        for dx in -reach..=reach {
            if ((dx * dx + dy * dy) as f32) <= radius * radius {
                canvas.set(cx + dx, cy + dy, pixel);
            }
        }
    }
}
