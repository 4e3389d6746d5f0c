//! Progressive quadtree mosaic approximation of raster images
//!
//! The engine approximates a source image with flat-colored axis-aligned
//! rectangles, refining the approximation by repeatedly subdividing the
//! rectangle whose area-weighted color variance is currently worst.

#![forbid(unsafe_code)]

/// Core decomposition engine: region statistics, quad scoring, quadrant
/// splitting, and priority-driven scheduling
pub mod engine;
/// Input/output operations, configuration, and error handling
pub mod io;
/// Rasterization of emitted quads onto an output canvas
pub mod render;
/// Rectangle and pixel buffer primitives
pub mod spatial;

pub use io::error::{MosaicError, Result};
