//! Algorithm constants and runtime configuration defaults

// Scoring constants (ITU-R BT.601 luma coefficients)
/// Red channel weight in the combined perceptual error
pub const LUMA_RED: f64 = 0.2989;
/// Green channel weight in the combined perceptual error
pub const LUMA_GREEN: f64 = 0.587;
/// Blue channel weight in the combined perceptual error
pub const LUMA_BLUE: f64 = 0.114;

/// Number of intensity buckets in a channel histogram
pub const HISTOGRAM_BUCKETS: usize = 256;

// Default values for configurable parameters
/// Default number of refinement steps before stopping
pub const DEFAULT_STEP_BUDGET: usize = 1000;
/// Default minimum region dimension; regions at or below it are terminal
pub const DEFAULT_MIN_DIMENSION: i32 = 4;
/// Default exponent applied to region area when scoring
pub const DEFAULT_AREA_EXPONENT: f64 = 0.2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed source image dimension in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;

// Progress bar display settings
/// Threshold for showing a batch-level progress bar
pub const BATCH_PROGRESS_THRESHOLD: usize = 2;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// Suffix added to visualization filenames
pub const VISUALIZATION_SUFFIX: &str = "_steps";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 5;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Color used when outlining painted rectangles
pub const OUTLINE_COLOR: [u8; 4] = [0, 0, 0, 255];
