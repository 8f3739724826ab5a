use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use ndarray::Array2;
use tracing::debug;

use crate::error::{AutolevelsError, Result};
use crate::frame::{ColorFrame, Frame};

/// Load an image file as 8-bit RGB. Alpha is dropped and gray is expanded.
pub fn load_color_image(path: &Path) -> Result<ColorFrame> {
    let img = image::open(path).map_err(|source| AutolevelsError::ImageLoad {
        origin: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), color = ?img.color(), "Decoded image");
    dynamic_to_frame(img)
}

/// Decode an in-memory encoded image (format guessed from its header).
pub fn decode_color_image(bytes: &[u8]) -> Result<ColorFrame> {
    let img = image::load_from_memory(bytes).map_err(|source| AutolevelsError::ImageLoad {
        origin: format!("<{} bytes in memory>", bytes.len()),
        source,
    })?;
    dynamic_to_frame(img)
}

fn dynamic_to_frame(img: DynamicImage) -> Result<ColorFrame> {
    rgb_image_to_frame(&img.to_rgb8())
}

/// Split an interleaved RGB buffer into three planes.
pub fn rgb_image_to_frame(img: &RgbImage) -> Result<ColorFrame> {
    let (w, h) = img.dimensions();
    let shape = (h as usize, w as usize);
    let mut red = Array2::<u8>::zeros(shape);
    let mut green = Array2::<u8>::zeros(shape);
    let mut blue = Array2::<u8>::zeros(shape);

    for (col, row, pixel) in img.enumerate_pixels() {
        let idx = [row as usize, col as usize];
        red[idx] = pixel.0[0];
        green[idx] = pixel.0[1];
        blue[idx] = pixel.0[2];
    }

    ColorFrame::new(Frame::new(red), Frame::new(green), Frame::new(blue))
}

/// Interleave the three planes back into an RGB buffer.
pub fn frame_to_rgb_image(color: &ColorFrame) -> RgbImage {
    RgbImage::from_fn(color.width() as u32, color.height() as u32, |x, y| {
        Rgb(color.pixel(y as usize, x as usize))
    })
}

/// Save a ColorFrame, choosing format from file extension (PNG if unknown).
pub fn save_color_image(color: &ColorFrame, path: &Path) -> Result<()> {
    let img = frame_to_rgb_image(color);
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    img.save_with_format(path, format)?;
    Ok(())
}
