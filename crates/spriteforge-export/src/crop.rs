use spriteforge_raster::canvas::Canvas;
use spriteforge_raster::paint::Color;

/// Inclusive pixel bounds `(min_x, min_y, max_x, max_y)` of the
/// non-transparent content, or `None` for an all-transparent canvas.
pub fn content_bounds(canvas: &Canvas) -> Option<(u32, u32, u32, u32)> {
    let width = canvas.width();
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (i, px) in canvas.pixels().iter().enumerate() {
        if px.is_transparent() {
            continue;
        }
        let x = (i as u32) % width;
        let y = (i as u32) / width;
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }

    bounds
}

/// Copies the minimal box containing any non-transparent pixel.
///
/// A canvas with no content (including a zero-sized one) yields a 1×1 fully
/// transparent canvas rather than failing.
pub fn crop_to_content(canvas: &Canvas) -> Canvas {
    let Some((x0, y0, x1, y1)) = content_bounds(canvas) else {
        return Canvas::new(1, 1);
    };

    Canvas::from_fn(x1 - x0 + 1, y1 - y0 + 1, |x, y| {
        canvas
            .get((x0 + x) as i32, (y0 + y) as i32)
            .unwrap_or(Color::transparent())
    })
}
