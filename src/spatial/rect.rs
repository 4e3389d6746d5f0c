//! Inclusive-bound axis-aligned rectangles over pixel coordinates

/// A rectangular region of the image with inclusive bounds on both axes
///
/// `left ≤ right` and `top ≤ bottom` hold for every region the engine
/// observes; the splitter may construct inverted (empty) bounds for
/// degenerate inputs, which [`Rect::is_empty`] detects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rect {
    /// Leftmost column (inclusive)
    pub left: i32,
    /// Rightmost column (inclusive)
    pub right: i32,
    /// Topmost row (inclusive)
    pub top: i32,
    /// Bottommost row (inclusive)
    pub bottom: i32,
}

impl Rect {
    /// Create a rectangle from inclusive bounds
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Number of columns covered, negative or zero when the bounds are inverted
    pub const fn width(self) -> i32 {
        self.right - self.left + 1
    }

    /// Number of rows covered, negative or zero when the bounds are inverted
    pub const fn height(self) -> i32 {
        self.bottom - self.top + 1
    }

    /// Number of pixels covered
    pub const fn area(self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Whether the bounds are inverted and cover no pixels
    pub const fn is_empty(self) -> bool {
        self.right < self.left || self.bottom < self.top
    }

    /// Whether the pixel coordinate lies within the bounds
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}
