//! Automatic per-channel levels correction.
//!
//! Each channel's histogram is scanned from both ends for the first intensity
//! where more than the allowed share of pixels has accumulated. Those black and
//! white points feed a linear curve that stretches the channel to [0, 255].

use tracing::{debug, info};

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::Result;
use crate::filters::curve::{build_curve, GrayPoint, Interpolant, LookupTable};
use crate::filters::histogram::{find_clip_points, ClipPoints, Histogram, SaturationThreshold};
use crate::frame::{Channel, ColorFrame};

use super::process::{from_channels, map_channels};

/// Histogram and clipping points found for one channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelAnalysis {
    pub channel: Channel,
    pub histogram: Histogram,
    pub clip_points: ClipPoints,
}

/// Outcome of [`correct`]: the untouched input, its corrected copy, and what
/// was measured on each channel (R, G, B order).
#[derive(Clone, Debug)]
pub struct Correction {
    pub original: ColorFrame,
    pub corrected: ColorFrame,
    pub channels: [ChannelAnalysis; 3],
}

/// Manually chosen curve for one channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveSpec {
    pub black: u8,
    pub white: u8,
    pub gray: Option<GrayPoint>,
}

impl CurveSpec {
    /// Check the control points without tabulating the curve.
    pub fn validate(&self) -> Result<Interpolant> {
        Interpolant::fit(self.black, self.white, self.gray)
    }

    pub fn build(&self) -> Result<LookupTable> {
        build_curve(self.black, self.white, self.gray)
    }
}

impl Default for CurveSpec {
    fn default() -> Self {
        let full = ClipPoints::full_range();
        Self {
            black: full.black,
            white: full.white,
            gray: None,
        }
    }
}

/// Measure histograms and clipping points of every channel.
pub fn analyze(image: &ColorFrame, threshold: SaturationThreshold) -> [ChannelAnalysis; 3] {
    map_channels(image, |channel, frame| {
        let histogram = Histogram::from_frame(frame);
        let clip_points = find_clip_points(&histogram, threshold);
        debug!(
            channel = %channel,
            black = clip_points.black,
            white = clip_points.white,
            "Clip points found"
        );
        ChannelAnalysis {
            channel,
            histogram,
            clip_points,
        }
    })
}

/// Stretch each channel of `image` so that `threshold_percent` of its pixels
/// saturate at each end.
///
/// The threshold is validated before any histogram is computed. The input is
/// not modified; a copy is returned alongside the corrected image.
pub fn correct(image: &ColorFrame, threshold_percent: f64) -> Result<Correction> {
    let threshold = SaturationThreshold::new(threshold_percent)?;

    info!(
        width = image.width(),
        height = image.height(),
        threshold = threshold.percent(),
        "Correcting image"
    );

    let channels = analyze(image, threshold);

    let mut tables = Vec::with_capacity(COLOR_CHANNEL_COUNT);
    for analysis in &channels {
        let points = analysis.clip_points;
        tables.push(build_curve(points.black, points.white, None)?);
    }

    let corrected = remap(image, &tables)?;

    Ok(Correction {
        original: image.clone(),
        corrected,
        channels,
    })
}

/// Apply a hand-specified curve to each channel (R, G, B order).
pub fn apply_curves(image: &ColorFrame, curves: &[CurveSpec; 3]) -> Result<ColorFrame> {
    let mut tables = Vec::with_capacity(COLOR_CHANNEL_COUNT);
    for spec in curves {
        tables.push(spec.build()?);
    }
    remap(image, &tables)
}

/// Remap every channel through its own table, indexed by [`Channel::index`].
fn remap(image: &ColorFrame, tables: &[LookupTable]) -> Result<ColorFrame> {
    let planes = map_channels(image, |channel, frame| tables[channel.index()].apply(frame));
    from_channels(planes)
}
