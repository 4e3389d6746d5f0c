//! Rasterization of emitted quads onto an output canvas

/// Canvas painting of filled rectangles
pub mod canvas;

pub use canvas::Canvas;
