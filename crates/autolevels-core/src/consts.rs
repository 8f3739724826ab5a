/// Minimum pixel count (h*w) to process the three channels on the Rayon pool.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of histogram bins, one per 8-bit intensity.
pub const HISTOGRAM_BINS: usize = 256;

/// Largest 8-bit intensity.
pub const MAX_INTENSITY: u8 = 255;

/// Number of channels in a color frame (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Default percentage of pixels per channel allowed to clip at each extreme.
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 1.0;

/// Default scale, in percent, of the side-by-side comparison.
pub const DEFAULT_SCALE_PERCENT: f64 = 100.0;

/// Window title used by the viewer when none is given.
pub const DEFAULT_WINDOW_TITLE: &str = "Default Title";
