use image::imageops::{self, FilterType};
use ndarray::{s, Array2};

use crate::error::{AutolevelsError, Result};
use crate::frame::{Channel, ColorFrame, Frame};

use super::image_io::{frame_to_rgb_image, rgb_image_to_frame};

/// Place `left` and `right` next to each other and scale the result.
///
/// `scale_percent` applies to both axes; 100 keeps the native size. Sizes are
/// truncated, with a floor of one pixel.
pub fn side_by_side(left: &ColorFrame, right: &ColorFrame, scale_percent: f64) -> Result<ColorFrame> {
    if !scale_percent.is_finite() || scale_percent <= 0.0 {
        return Err(AutolevelsError::InvalidScale(scale_percent));
    }
    let expected = left.red().data.dim();
    let found = right.red().data.dim();
    if expected != found {
        return Err(AutolevelsError::ChannelMismatch { expected, found });
    }

    let [red, green, blue] =
        Channel::ALL.map(|c| Frame::new(concat_columns(&left.channel(c).data, &right.channel(c).data)));
    let combined = ColorFrame::new(red, green, blue)?;

    if scale_percent == 100.0 {
        return Ok(combined);
    }

    let width = scaled_len(combined.width(), scale_percent);
    let height = scaled_len(combined.height(), scale_percent);
    let resized = imageops::resize(
        &frame_to_rgb_image(&combined),
        width,
        height,
        FilterType::Triangle,
    );
    rgb_image_to_frame(&resized)
}

fn concat_columns(left: &Array2<u8>, right: &Array2<u8>) -> Array2<u8> {
    let (h, w) = left.dim();
    let mut out = Array2::<u8>::zeros((h, w * 2));
    out.slice_mut(s![.., ..w]).assign(left);
    out.slice_mut(s![.., w..]).assign(right);
    out
}

fn scaled_len(len: usize, scale_percent: f64) -> u32 {
    ((len as f64 * scale_percent / 100.0) as u32).max(1)
}
