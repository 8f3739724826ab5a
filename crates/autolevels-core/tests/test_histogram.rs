mod common;

use approx::assert_relative_eq;
use autolevels_core::error::AutolevelsError;
use autolevels_core::filters::histogram::{
    find_clip_points, ClipPoints, Histogram, SaturationThreshold,
};
use autolevels_core::frame::Frame;

use common::{make_full_ramp, make_span};

fn clip(frame: &Frame, percent: f64) -> ClipPoints {
    let threshold = SaturationThreshold::new(percent).unwrap();
    find_clip_points(&Histogram::from_frame(frame), threshold)
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

#[test]
fn test_histogram_sums_to_pixel_count() {
    let ramp = make_full_ramp();
    let hist = Histogram::from_frame(&ramp);
    assert_eq!(hist.total(), 256);
    assert!(hist.counts().iter().all(|&c| c == 1));
    assert_eq!(hist.cumulative().total(), 256);
}

#[test]
fn test_cumulative_is_non_decreasing() {
    let hist = Histogram::from_frame(&make_span(30, 90));
    let values = hist.cumulative().values().to_vec();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(values[29], 0);
    assert_eq!(values[90], 61);
}

#[test]
fn test_threshold_pixel_count() {
    let t = SaturationThreshold::new(1.5).unwrap();
    assert_relative_eq!(t.pixel_count(200), 3.0);
    assert_relative_eq!(SaturationThreshold::default().percent(), 1.0);
}

#[test]
fn test_rejects_threshold_outside_percent_range() {
    for bad in [150.0, 100.01, -0.5, f64::NAN, f64::INFINITY] {
        let err = SaturationThreshold::new(bad).unwrap_err();
        assert!(matches!(err, AutolevelsError::InvalidThreshold(_)), "{bad}");
    }
    assert!(SaturationThreshold::new(0.0).is_ok());
    assert!(SaturationThreshold::new(100.0).is_ok());
}

// ---------------------------------------------------------------------------
// Clip points
// ---------------------------------------------------------------------------

#[test]
fn test_zero_threshold_finds_occupied_extremes() {
    let points = clip(&make_span(50, 200), 0.0);
    assert_eq!(points, ClipPoints { black: 50, white: 200 });
}

#[test]
fn test_ten_percent_of_ramp() {
    // 25.6 pixels may clip, so the 26th intensity from each end is the point.
    let points = clip(&make_full_ramp(), 10.0);
    assert_eq!(points.black, 25);
    assert_eq!(points.white, 230);
}

#[test]
fn test_uniform_plane_collapses_to_single_point() {
    let points = clip(&Frame::filled(4, 4, 128), 1.0);
    assert_eq!(points, ClipPoints { black: 128, white: 128 });
    assert!(points.is_degenerate());
}

#[test]
fn test_full_threshold_falls_back_to_full_range() {
    let points = clip(&make_span(50, 200), 100.0);
    assert_eq!(points, ClipPoints::full_range());
}

#[test]
fn test_overlapping_points_clamp_white_to_black() {
    // 60% of 256 = 153.6: black = 153, raw white = 102.
    let points = clip(&make_full_ramp(), 60.0);
    assert_eq!(points, ClipPoints { black: 153, white: 153 });
}

#[test]
fn test_increasing_threshold_narrows_range() {
    let ramp = make_full_ramp();
    let thresholds = [0.0, 0.5, 1.0, 2.5, 5.0, 10.0, 20.0, 35.0, 49.0];
    let points: Vec<ClipPoints> = thresholds.iter().map(|&t| clip(&ramp, t)).collect();
    for pair in points.windows(2) {
        assert!(pair[1].black >= pair[0].black, "{:?} -> {:?}", pair[0], pair[1]);
        assert!(pair[1].white <= pair[0].white, "{:?} -> {:?}", pair[0], pair[1]);
    }
}

#[test]
fn test_clip_points_reject_inverted_range() {
    assert!(ClipPoints::new(10, 20).is_ok());
    assert!(matches!(
        ClipPoints::new(21, 20),
        Err(AutolevelsError::InvalidRange { .. })
    ));
}
