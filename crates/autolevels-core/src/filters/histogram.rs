use tracing::debug;

use crate::consts::{DEFAULT_THRESHOLD_PERCENT, HISTOGRAM_BINS, MAX_INTENSITY};
use crate::error::{AutolevelsError, Result};
use crate::frame::Frame;

/// Per-intensity pixel counts of one channel plane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; HISTOGRAM_BINS],
}

impl Histogram {
    pub fn from_counts(counts: [u64; HISTOGRAM_BINS]) -> Self {
        Self { counts }
    }

    /// Count every pixel of `frame` into its intensity bin.
    pub fn from_frame(frame: &Frame) -> Self {
        let mut counts = [0u64; HISTOGRAM_BINS];
        for &v in frame.data.iter() {
            counts[v as usize] += 1;
        }
        Self { counts }
    }

    pub fn counts(&self) -> &[u64; HISTOGRAM_BINS] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Same counts with bin 255 first.
    pub fn reversed(&self) -> Self {
        let mut counts = self.counts;
        counts.reverse();
        Self { counts }
    }

    pub fn cumulative(&self) -> CumulativeHistogram {
        let mut values = [0u64; HISTOGRAM_BINS];
        let mut running = 0u64;
        for (slot, &count) in values.iter_mut().zip(self.counts.iter()) {
            running += count;
            *slot = running;
        }
        CumulativeHistogram { values }
    }
}

/// Prefix sums of a [`Histogram`]. Non-decreasing; the last entry is the pixel total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CumulativeHistogram {
    values: [u64; HISTOGRAM_BINS],
}

impl CumulativeHistogram {
    pub fn values(&self) -> &[u64; HISTOGRAM_BINS] {
        &self.values
    }

    pub fn total(&self) -> u64 {
        self.values[HISTOGRAM_BINS - 1]
    }

    /// First bin whose cumulative count is strictly greater than `threshold`.
    pub fn first_exceeding(&self, threshold: f64) -> Option<u8> {
        self.values
            .iter()
            .position(|&c| c as f64 > threshold)
            .map(|i| i as u8)
    }
}

/// Percentage of pixels per channel allowed to clip at each extreme.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct SaturationThreshold(f64);

impl SaturationThreshold {
    /// Accepts any finite percentage in [0, 100].
    pub fn new(percent: f64) -> Result<Self> {
        if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
            return Err(AutolevelsError::InvalidThreshold(percent));
        }
        Ok(Self(percent))
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    /// Number of pixels, out of `total`, that this threshold allows to clip.
    pub fn pixel_count(self, total: u64) -> f64 {
        total as f64 * self.0 / 100.0
    }
}

impl Default for SaturationThreshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD_PERCENT)
    }
}

impl std::fmt::Display for SaturationThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Black and white clipping points of one channel, `black <= white`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClipPoints {
    pub black: u8,
    pub white: u8,
}

impl ClipPoints {
    pub fn new(black: u8, white: u8) -> Result<Self> {
        if black > white {
            return Err(AutolevelsError::InvalidRange { black, white });
        }
        Ok(Self { black, white })
    }

    /// The no-op range [0, 255].
    pub fn full_range() -> Self {
        Self {
            black: 0,
            white: MAX_INTENSITY,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.black == self.white
    }
}

/// Locate the clipping points of a channel.
///
/// The black point is the first intensity whose cumulative count exceeds the
/// allowed pixel count; the white point is found the same way scanning down
/// from 255. A scan that never exceeds the count falls back to 0 (black) or
/// 255 (white). Overlapping points are resolved by raising white to black.
pub fn find_clip_points(histogram: &Histogram, threshold: SaturationThreshold) -> ClipPoints {
    let allowed = threshold.pixel_count(histogram.total());

    let black = histogram.cumulative().first_exceeding(allowed).unwrap_or(0);
    let mut white = histogram
        .reversed()
        .cumulative()
        .first_exceeding(allowed)
        .map(|c| MAX_INTENSITY - c)
        .unwrap_or(MAX_INTENSITY);

    if black > white {
        debug!(black, white, "Clip points overlap, clamping white to black");
        white = black;
    }

    ClipPoints { black, white }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cumulative_ends_at_total() {
        let mut counts = [0u64; HISTOGRAM_BINS];
        counts[3] = 4;
        counts[200] = 6;
        let cumulative = Histogram::from_counts(counts).cumulative();
        assert_eq!(cumulative.values()[2], 0);
        assert_eq!(cumulative.values()[3], 4);
        assert_eq!(cumulative.values()[199], 4);
        assert_eq!(cumulative.total(), 10);
    }

    #[test]
    fn first_exceeding_is_strict() {
        let mut counts = [0u64; HISTOGRAM_BINS];
        counts[10] = 5;
        counts[20] = 5;
        let cumulative = Histogram::from_counts(counts).cumulative();
        assert_eq!(cumulative.first_exceeding(4.9), Some(10));
        assert_eq!(cumulative.first_exceeding(5.0), Some(20));
        assert_eq!(cumulative.first_exceeding(10.0), None);
    }

    #[test]
    fn reversed_moves_top_bin_first() {
        let mut counts = [0u64; HISTOGRAM_BINS];
        counts[255] = 7;
        let reversed = Histogram::from_counts(counts).reversed();
        assert_eq!(reversed.counts()[0], 7);
        assert_eq!(reversed.total(), 7);
    }
}
