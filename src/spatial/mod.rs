//! Rectangle and pixel buffer primitives shared across the engine

/// Read-only RGB pixel buffers
pub mod pixels;
/// Inclusive-bound axis-aligned rectangles
pub mod rect;

pub use pixels::PixelBuffer;
pub use rect::Rect;
