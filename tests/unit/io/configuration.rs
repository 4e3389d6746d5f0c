//! Tests for configuration constants and their relationships

#[cfg(test)]
mod tests {
    use quadmosaic::io::configuration::{
        DEFAULT_AREA_EXPONENT, DEFAULT_MIN_DIMENSION, DEFAULT_STEP_BUDGET, GIF_FRAME_DELAY_MS,
        HISTOGRAM_BUCKETS, LUMA_BLUE, LUMA_GREEN, LUMA_RED, MAX_IMAGE_DIMENSION,
        VIEWER_MIN_FRAME_DELAY_MS,
    };

    // Tests the BT.601 luma weights sum to one (within the published
    // four-digit precision)
    #[test]
    fn test_luma_weights_sum_to_one() {
        let sum = LUMA_RED + LUMA_GREEN + LUMA_BLUE;
        assert!((sum - 1.0).abs() < 1e-3, "Luma weights sum to {sum}");
    }

    #[test]
    fn test_histogram_covers_the_sample_range() {
        assert_eq!(HISTOGRAM_BUCKETS, 256);
    }

    #[test]
    fn test_engine_defaults_are_usable() {
        assert!(DEFAULT_STEP_BUDGET > 0);
        assert!(DEFAULT_MIN_DIMENSION >= 1);
        assert!(DEFAULT_AREA_EXPONENT > 0.0 && DEFAULT_AREA_EXPONENT < 1.0);
        assert!(MAX_IMAGE_DIMENSION >= 1024);
    }

    // Tests the frame-delay pair drives a frame-skipping factor rather than
    // a slowed-down animation
    #[test]
    fn test_gif_delays_allow_frame_skipping() {
        assert!(GIF_FRAME_DELAY_MS > 0);
        assert!(VIEWER_MIN_FRAME_DELAY_MS >= GIF_FRAME_DELAY_MS);
    }
}
