use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutolevelsError {
    #[error("Could not read the image {origin}: {source}")]
    ImageLoad {
        origin: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Saturation threshold must be within [0, 100] percent, got {0}")]
    InvalidThreshold(f64),

    #[error("Black point {black} is above white point {white}")]
    InvalidRange { black: u8, white: u8 },

    #[error("Gray point input {input} must lie strictly between black point {black} and white point {white}")]
    InvalidGrayPoint { black: u8, white: u8, input: u8 },

    #[error("Display scale must be a positive percentage, got {0}")]
    InvalidScale(f64),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Channel planes differ in size: {expected:?} vs {found:?}")]
    ChannelMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

pub type Result<T> = std::result::Result<T, AutolevelsError>;
