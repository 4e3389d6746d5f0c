//! Quadrant splitting of rectangular regions

use crate::spatial::rect::Rect;

/// Partition a region into its four quadrants
///
/// Children are returned in fixed top-left, top-right, bottom-left,
/// bottom-right order and exactly tile the input for any region at least
/// 2×2: no overlap, no gap. This is pure geometry with no defensive check;
/// a width or height of 1 yields an inverted, empty child. The scheduler
/// never splits regions at the minimum dimension, so that case is
/// unreachable in normal operation.
pub const fn split_quadrants(region: Rect) -> [Rect; 4] {
    let center_x = (region.left + region.right) / 2;
    let center_y = (region.top + region.bottom) / 2;

    [
        Rect::new(region.left, center_x - 1, region.top, center_y - 1),
        Rect::new(center_x, region.right, region.top, center_y - 1),
        Rect::new(region.left, center_x - 1, center_y, region.bottom),
        Rect::new(center_x, region.right, center_y, region.bottom),
    ]
}
