//! Per-shape fill routines.
//!
//! Responsibilities:
//! - classify integer pixel coordinates against one shape
//! - write the brush pixel into every covered canvas position
//! - treat degenerate shapes as no-ops, never as errors
//!
//! Layout mirrors `shape::*`: one fill routine per shape file, dispatched
//! through [`fill`].

mod circle;
mod polygon;
mod rounded_rect;
mod triangle;

use crate::canvas::Canvas;
use crate::paint::Brush;
use crate::shape::Shape;

/// Fills `shape` into an existing canvas, compositing over prior content.
///
/// Pixels outside the canvas are silently skipped; pixels not covered by the
/// shape are left untouched.
pub fn fill(canvas: &mut Canvas, shape: &Shape, brush: Brush) {
    match shape {
        Shape::RoundedRect(s) => rounded_rect::fill(canvas, s, brush),
        Shape::Triangle(s) => triangle::fill(canvas, s, brush),
        Shape::Polygon(s) => polygon::fill(canvas, s, brush),
        Shape::Circle(s) => circle::fill(canvas, s, brush),
    }
}

/// Rasterizes `shape` standalone: allocates a transparent canvas sized by
/// [`Shape::canvas_size`] and fills into it.
///
/// Degenerate shapes produce an empty (possibly zero-sized) canvas.
pub fn rasterize(shape: &Shape, brush: Brush) -> Canvas {
    let (width, height) = shape.canvas_size();
    let mut canvas = Canvas::new(width, height);
    fill(&mut canvas, shape, brush);
    canvas
}
