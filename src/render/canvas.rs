//! Canvas painting of filled rectangles
//!
//! The render sink for the engine: every emitted `(region, fill)` tuple is
//! drawn as one filled rectangle over the region's inclusive pixel bounds.
//! Later paints overwrite earlier ones, which is safe because children
//! exactly tile their parent.

use crate::io::configuration::OUTLINE_COLOR;
use crate::spatial::rect::Rect;
use image::{Rgba, RgbaImage};

/// An RGBA output image accepting rectangle paint operations
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
    outline: bool,
}

impl Canvas {
    /// Create a blank canvas; with `outline` set, every painted rectangle
    /// gets a one-pixel border
    pub fn new(width: u32, height: u32, outline: bool) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            outline,
        }
    }

    /// Fill the region's inclusive bounds with the given color
    ///
    /// Coordinates outside the canvas are clipped; an inverted region paints
    /// nothing.
    pub fn paint(&mut self, region: Rect, fill: [u8; 3]) {
        let left = region.left.max(0);
        let top = region.top.max(0);
        let right = region.right.min(self.image.width() as i32 - 1);
        let bottom = region.bottom.min(self.image.height() as i32 - 1);
        if right < left || bottom < top {
            return;
        }

        let color = Rgba([fill[0], fill[1], fill[2], 255]);
        for y in top..=bottom {
            for x in left..=right {
                self.image.put_pixel(x as u32, y as u32, color);
            }
        }

        if self.outline {
            let border = Rgba(OUTLINE_COLOR);
            for x in left..=right {
                self.image.put_pixel(x as u32, top as u32, border);
                self.image.put_pixel(x as u32, bottom as u32, border);
            }
            for y in top..=bottom {
                self.image.put_pixel(left as u32, y as u32, border);
                self.image.put_pixel(right as u32, y as u32, border);
            }
        }
    }

    /// Borrow the backing image
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the canvas, yielding the backing image
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
