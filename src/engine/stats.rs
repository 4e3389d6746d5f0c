//! Per-channel intensity statistics over rectangular regions
//!
//! Statistics are computed fresh for every quad from a 256-bucket frequency
//! histogram; nothing is cached between calls.

use crate::io::configuration::HISTOGRAM_BUCKETS;
use crate::spatial::pixels::PixelBuffer;
use crate::spatial::rect::Rect;

/// Intensity distribution summary for one color channel over one region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStatistics {
    /// Floored mean intensity, used as the region's fill value
    pub representative: u8,
    /// Population standard deviation of the intensity
    pub dispersion: f64,
}

/// Compute mean and dispersion of one channel over a region
///
/// The variance is centered on the unrounded mean; only the reported
/// representative value is floored. The region must cover at least one
/// pixel, which the scheduler guarantees by never splitting regions at the
/// minimum dimension.
pub fn channel_statistics(
    pixels: &PixelBuffer,
    region: Rect,
    channel: usize,
) -> ChannelStatistics {
    debug_assert!(!region.is_empty(), "statistics over an empty region");

    let mut histogram = [0u64; HISTOGRAM_BUCKETS];
    for y in region.top..=region.bottom {
        for x in region.left..=region.right {
            let value = pixels.sample(x, y, channel);
            if let Some(bucket) = histogram.get_mut(value as usize) {
                *bucket += 1;
            }
        }
    }

    let count = region.area() as f64;
    let total: f64 = histogram
        .iter()
        .enumerate()
        .map(|(intensity, &frequency)| intensity as f64 * frequency as f64)
        .sum();
    let mean = total / count;

    let variance: f64 = histogram
        .iter()
        .enumerate()
        .map(|(intensity, &frequency)| frequency as f64 * (intensity as f64 - mean).powi(2))
        .sum::<f64>()
        / count;

    ChannelStatistics {
        representative: mean.floor() as u8,
        dispersion: variance.sqrt(),
    }
}
