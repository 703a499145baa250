use crate::canvas::Canvas;
use crate::coords::Rect;
use crate::paint::Brush;
use crate::shape::PolygonShape;

/// Even-odd scanline fill.
///
/// For each scanline the routine collects rounded x-intersections with every
/// edge crossing it, sorts them, and fills the inclusive span between each
/// successive pair. Spans are intersected with the canvas; fully off-canvas
/// spans write nothing.
pub(crate) fn fill(canvas: &mut Canvas, shape: &PolygonShape, brush: Brush) {
    if shape.is_degenerate() {
        log::debug!("skipping degenerate polygon with {} point(s)", shape.points.len());
        return;
    }

    let canvas_rect = Rect::new(0.0, 0.0, canvas.width() as f32, canvas.height() as f32);
    let Some(bounds) = shape.bounds() else { return };
    let Some(visible) = bounds.intersect(canvas_rect) else {
        log::debug!("polygon has no visible area on the canvas");
        return;
    };

    let y_start = visible.min().y.floor().max(0.0) as i32;
    let y_end = visible.max().y.ceil().min(canvas.height() as f32 - 1.0) as i32;
    let pixel = brush.pixel();
    let points = &shape.points;
    let mut crossings: Vec<i32> = Vec::new();

    for y in y_start..=y_end {
        let yf = y as f32;
        crossings.clear();

        // Closed ring: each vertex pairs with its predecessor.
        let mut j = points.len() - 1;
        for i in 0..points.len() {
            let (pi, pj) = (points[i], points[j]);
            // Half-open crossing rule: one endpoint strictly below the
            // scanline, the other at or above it.
            if (pi.y < yf && pj.y >= yf) || (pj.y < yf && pi.y >= yf) {
                let x = pi.x + (yf - pi.y) / (pj.y - pi.y) * (pj.x - pi.x);
                crossings.push(x.round() as i32);
            }
            j = i;
        }

        crossings.sort_unstable();

        for pair in crossings.chunks_exact(2) {
            let x0 = pair[0].max(0);
            let x1 = pair[1].min(canvas.width() as i32 - 1);
            for x in x0..=x1 {
                canvas.set(x, y, pixel);
            }
        }
    }
}
