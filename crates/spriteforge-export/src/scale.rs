use spriteforge_raster::canvas::Canvas;
use spriteforge_raster::paint::Color;

/// Integer nearest-neighbor upscale: every source pixel becomes a
/// `factor` × `factor` block. Factors 0 and 1 return the canvas unchanged.
pub fn upscale(canvas: &Canvas, factor: u32) -> Canvas {
    if factor <= 1 {
        return canvas.clone();
    }

    Canvas::from_fn(
        canvas.width() * factor,
        canvas.height() * factor,
        |x, y| {
            canvas
                .get((x / factor) as i32, (y / factor) as i32)
                .unwrap_or(Color::transparent())
        },
    )
}
