#![allow(dead_code)]

use std::path::{Path, PathBuf};

use autolevels_core::frame::{ColorFrame, Frame};
use autolevels_core::io::image_io::save_color_image;
use ndarray::Array2;

/// Color frame where every pixel is `rgb`.
pub fn make_color_frame(h: usize, w: usize, rgb: [u8; 3]) -> ColorFrame {
    ColorFrame::filled(h, w, rgb).expect("non-empty frame")
}

/// Same plane in all three channels.
pub fn gray_color_frame(plane: Frame) -> ColorFrame {
    ColorFrame::new(plane.clone(), plane.clone(), plane).expect("matching planes")
}

/// 16x16 plane holding every intensity 0..=255 exactly once.
pub fn make_full_ramp() -> Frame {
    Frame::new(Array2::from_shape_fn((16, 16), |(row, col)| (row * 16 + col) as u8))
}

/// Single-row plane holding every intensity in `lo..=hi` exactly once.
pub fn make_span(lo: u8, hi: u8) -> Frame {
    let values: Vec<u8> = (lo..=hi).collect();
    let n = values.len();
    Frame::new(Array2::from_shape_vec((1, n), values).expect("shape matches"))
}

/// Save `frame` as PNG inside `dir` and return the path.
pub fn write_test_png(dir: &Path, name: &str, frame: &ColorFrame) -> PathBuf {
    let path = dir.join(name);
    save_color_image(frame, &path).expect("write test png");
    path
}

/// Assert a table never decreases over `lo..=hi`.
pub fn assert_non_decreasing(entries: &[u8], lo: usize, hi: usize) {
    for i in lo..hi {
        assert!(
            entries[i] <= entries[i + 1],
            "table decreases at {i}: {} > {}",
            entries[i],
            entries[i + 1]
        );
    }
}
