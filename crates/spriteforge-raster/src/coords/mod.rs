//! Coordinate and geometry types shared across rasterization and export.
//!
//! Canonical space:
//! - Pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Rasterizers classify integer pixel centers against this space.

mod corner_radii;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
