use crate::consts::{HISTOGRAM_BINS, MAX_INTENSITY};
use crate::error::{AutolevelsError, Result};
use crate::frame::Frame;

/// Slack added before truncating interpolated values, so that results which
/// are integral in exact arithmetic don't drop one level to rounding error.
const TRUNCATION_EPSILON: f64 = 1e-9;

/// Midtone anchor: `input` intensity is mapped to `output`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrayPoint {
    pub input: u8,
    pub output: u8,
}

impl GrayPoint {
    pub fn new(input: u8, output: u8) -> Self {
        Self { input, output }
    }
}

/// Tone curve between the black and white points, chosen once per table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interpolant {
    /// Black and white coincide: 0 below the point, 255 from it upward.
    Step { at: u8 },
    /// Straight line from (black, 0) to (white, 255).
    Linear { black: u8, white: u8 },
    /// Parabola through (black, 0), (gray.input, gray.output), (white, 255).
    Quadratic { black: u8, gray: GrayPoint, white: u8 },
}

impl Interpolant {
    /// Pick and validate the interpolant for the given control points.
    pub fn fit(black: u8, white: u8, gray: Option<GrayPoint>) -> Result<Self> {
        if black > white {
            return Err(AutolevelsError::InvalidRange { black, white });
        }

        match gray {
            Some(gray) => {
                if gray.input <= black || gray.input >= white {
                    return Err(AutolevelsError::InvalidGrayPoint {
                        black,
                        white,
                        input: gray.input,
                    });
                }
                Ok(Self::Quadratic { black, gray, white })
            }
            None if black == white => Ok(Self::Step { at: black }),
            None => Ok(Self::Linear { black, white }),
        }
    }

    /// The (black, white) input range the curve spans.
    pub fn range(&self) -> (u8, u8) {
        match *self {
            Self::Step { at } => (at, at),
            Self::Linear { black, white } | Self::Quadratic { black, white, .. } => {
                (black, white)
            }
        }
    }

    /// Unclamped curve value at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let top = MAX_INTENSITY as f64;
        match *self {
            Self::Step { at } => {
                if x < at as f64 {
                    0.0
                } else {
                    top
                }
            }
            Self::Linear { black, white } => {
                let (b, w) = (black as f64, white as f64);
                (x - b) * top / (w - b)
            }
            Self::Quadratic { black, gray, white } => {
                let (x0, x1, x2) = (black as f64, gray.input as f64, white as f64);
                let y1 = gray.output as f64;
                // Lagrange form; the (x0, 0) term vanishes.
                let l1 = (x - x0) * (x - x2) / ((x1 - x0) * (x1 - x2));
                let l2 = (x - x0) * (x - x1) / ((x2 - x0) * (x2 - x1));
                y1 * l1 + top * l2
            }
        }
    }
}

/// 256-entry intensity remapping table for one channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupTable {
    entries: [u8; HISTOGRAM_BINS],
}

impl LookupTable {
    pub fn identity() -> Self {
        let mut entries = [0u8; HISTOGRAM_BINS];
        for (i, slot) in entries.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self { entries }
    }

    /// Tabulate `interpolant`, saturating outside its range.
    ///
    /// Interpolated values are clamped to [0, 255] and truncated. Because the
    /// endpoints are pinned at 0 and 255, any extremum of the quadratic inside
    /// the range lies outside [0, 255], so the clamped table never decreases.
    pub fn from_interpolant(interpolant: &Interpolant) -> Self {
        let (black, white) = interpolant.range();
        let mut entries = [0u8; HISTOGRAM_BINS];

        for (i, slot) in entries.iter_mut().enumerate() {
            *slot = if i < black as usize {
                0
            } else if i > white as usize {
                MAX_INTENSITY
            } else {
                let v = interpolant.evaluate(i as f64) + TRUNCATION_EPSILON;
                v.clamp(0.0, MAX_INTENSITY as f64) as u8
            };
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[u8; HISTOGRAM_BINS] {
        &self.entries
    }

    pub fn get(&self, input: u8) -> u8 {
        self.entries[input as usize]
    }

    /// Replace every pixel of `frame` with its table entry.
    pub fn apply(&self, frame: &Frame) -> Frame {
        Frame::new(frame.data.mapv(|v| self.entries[v as usize]))
    }

    pub fn is_identity(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(i, &v)| v as usize == i)
    }
}

/// Build the lookup table for one channel.
///
/// Without a gray point the curve is linear between (black, 0) and
/// (white, 255); with one it is the quadratic through all three anchors.
/// `black == white` yields a step at that intensity.
pub fn build_curve(black: u8, white: u8, gray: Option<GrayPoint>) -> Result<LookupTable> {
    let interpolant = Interpolant::fit(black, white, gray)?;
    Ok(LookupTable::from_interpolant(&interpolant))
}
