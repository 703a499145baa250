//! Spriteforge rasterization crate.
//!
//! This crate owns the CPU-side pieces used by higher layers: geometry types,
//! the pixel canvas, shape descriptors, and the per-shape fill routines.

pub mod canvas;
pub mod coords;
pub mod paint;
pub mod raster;
pub mod shape;

pub mod logging;
