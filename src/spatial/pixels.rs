//! Read-only RGB pixel storage backed by a dense ndarray
//!
//! The engine only ever reads samples, so the buffer is constructed once at
//! load time and shared by reference for the rest of the run. Alpha is
//! dropped on construction.

use crate::spatial::rect::Rect;
use image::RgbaImage;
use ndarray::Array3;

/// Number of color channels stored per pixel (red, green, blue)
pub const CHANNELS: usize = 3;

/// A width × height grid of 8-bit RGB samples addressable by `(x, y, channel)`
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    samples: Array3<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Build a buffer from a decoded RGBA image, discarding the alpha channel
    pub fn from_rgba(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let samples = Array3::from_shape_fn(
            (height as usize, width as usize, CHANNELS),
            |(y, x, channel)| {
                let pixel = image.get_pixel(x as u32, y as u32);
                pixel.0.get(channel).copied().unwrap_or(0)
            },
        );

        Self {
            samples,
            width,
            height,
        }
    }

    /// Build a buffer by evaluating `sample` at every `(x, y, channel)`
    ///
    /// Primarily used by tests and benchmarks to construct synthetic images.
    pub fn from_fn<F>(width: u32, height: u32, sample: F) -> Self
    where
        F: Fn(i32, i32, usize) -> u8,
    {
        let samples = Array3::from_shape_fn(
            (height as usize, width as usize, CHANNELS),
            |(y, x, channel)| sample(x as i32, y as i32, channel),
        );

        Self {
            samples,
            width,
            height,
        }
    }

    /// Image width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The whole-image region `(0,0)..(width-1,height-1)`
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, self.width as i32 - 1, 0, self.height as i32 - 1)
    }

    /// Read one channel sample, returning 0 for out-of-range coordinates
    pub fn sample(&self, x: i32, y: i32, channel: usize) -> u8 {
        if x < 0 || y < 0 {
            return 0;
        }
        self.samples
            .get((y as usize, x as usize, channel))
            .copied()
            .unwrap_or(0)
    }
}
