use crate::canvas::Canvas;
use crate::coords::CornerRadii;
use crate::paint::Brush;
use crate::shape::RoundedRectShape;

/// Fills a rounded rectangle by per-pixel classification.
///
/// A pixel inside a corner zone is covered iff its squared distance to that
/// corner's arc center is at most radius²; pixels outside every corner zone
/// are covered unconditionally.
pub(crate) fn fill(canvas: &mut Canvas, shape: &RoundedRectShape, brush: Brush) {
    if shape.is_degenerate() {
        log::debug!("skipping degenerate rounded rect {}x{}", shape.width, shape.height);
        return;
    }

    let w = shape.width as f32;
    let h = shape.height as f32;
    let radii = shape.radii.clamped_to(w, h);
    let pixel = brush.pixel();

    for y in 0..shape.height {
        for x in 0..shape.width {
            if covers(x as f32, y as f32, w, h, radii) {
                canvas.set(x as i32, y as i32, pixel);
            }
        }
    }
}

fn covers(x: f32, y: f32, w: f32, h: f32, r: CornerRadii) -> bool {
    // Clamping guarantees corner zones are disjoint, so at most one test runs.
    if x < r.top_left && y < r.top_left {
        return within_arc(x, y, r.top_left, r.top_left, r.top_left);
    }
    if x >= w - r.top_right && y < r.top_right {
        return within_arc(x, y, w - r.top_right, r.top_right, r.top_right);
    }
    if x < r.bottom_left && y >= h - r.bottom_left {
        return within_arc(x, y, r.bottom_left, h - r.bottom_left, r.bottom_left);
    }
    if x >= w - r.bottom_right && y >= h - r.bottom_right {
        return within_arc(x, y, w - r.bottom_right, h - r.bottom_right, r.bottom_right);
    }
    true
}

#[inline]
fn within_arc(x: f32, y: f32, cx: f32, cy: f32, radius: f32) -> bool {
    let dx = x - cx;
    let dy = y - cy;
    dx * dx + dy * dy <= radius * radius
}
