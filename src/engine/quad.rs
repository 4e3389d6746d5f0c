//! Quad records and the scoring factory
//!
//! A quad couples a region with its fill color and split priority. The
//! priority is derived from the region's pixel content once, at
//! construction; quads are never re-scored.

use crate::engine::scheduler::DecomposerConfig;
use crate::engine::stats::channel_statistics;
use crate::io::configuration::{LUMA_BLUE, LUMA_GREEN, LUMA_RED};
use crate::spatial::pixels::PixelBuffer;
use crate::spatial::rect::Rect;
use std::cmp::Ordering;

/// Split priority of a quad
///
/// `Terminal` marks regions at or below the minimum dimension and sorts
/// below every `Active` value, so a terminal quad is only ever popped once
/// no splittable region remains.
#[derive(Debug, Clone, Copy)]
pub enum Priority {
    /// Region at minimum size; never worth splitting
    Terminal,
    /// Combined perceptual error scaled by region area
    Active(f64),
}

impl Priority {
    /// The score of an active priority, or `None` for terminal quads
    pub const fn score(self) -> Option<f64> {
        match self {
            Self::Terminal => None,
            Self::Active(value) => Some(value),
        }
    }

    /// Whether this priority marks a region as un-splittable
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Terminal)
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Terminal, Self::Terminal) => Ordering::Equal,
            (Self::Terminal, Self::Active(_)) => Ordering::Less,
            (Self::Active(_), Self::Terminal) => Ordering::Greater,
            (Self::Active(a), Self::Active(b)) => a.total_cmp(b),
        }
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

/// One unit of work and of rendering output
///
/// Held in the scheduler's queue from construction until popped, then
/// discarded after producing its four children. The rendered rectangle
/// remains visible as part of the cumulative output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quad {
    /// The region this quad covers
    pub region: Rect,
    /// Split priority, fixed at construction
    pub priority: Priority,
    /// Per-channel representative color used to paint the region
    pub fill: [u8; 3],
}

impl Ord for Quad {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.region.cmp(&other.region))
            .then_with(|| self.fill.cmp(&other.fill))
    }
}

impl PartialOrd for Quad {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Score a region and produce its immutable quad record
///
/// Statistics are computed independently per channel; the dispersions are
/// combined with luma weights so that busyness in the green channel counts
/// roughly five times as much as in blue. The combined error is scaled by
/// `area^area_exponent`, preferring large busy regions over small busy ones
/// while keeping uniform regions at score zero regardless of size. Regions
/// at or below the minimum dimension are terminal.
pub fn build_quad(pixels: &PixelBuffer, region: Rect, config: &DecomposerConfig) -> Quad {
    let red = channel_statistics(pixels, region, 0);
    let green = channel_statistics(pixels, region, 1);
    let blue = channel_statistics(pixels, region, 2);

    let fill = [red.representative, green.representative, blue.representative];

    let priority = if region.width() <= config.minimum_dimension
        || region.height() <= config.minimum_dimension
    {
        Priority::Terminal
    } else {
        let combined_error =
            LUMA_RED * red.dispersion + LUMA_GREEN * green.dispersion + LUMA_BLUE * blue.dispersion;
        Priority::Active(combined_error * (region.area() as f64).powf(config.area_exponent))
    };

    Quad {
        region,
        priority,
        fill,
    }
}
