use ndarray::Array2;

use crate::error::{AutolevelsError, Result};

/// A single 8-bit intensity plane.
/// Pixel values are u8 in [0, 255].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<u8>,
}

impl Frame {
    pub fn new(data: Array2<u8>) -> Self {
        Self { data }
    }

    /// A plane of the given size where every pixel has the same value.
    pub fn filled(height: usize, width: usize, value: u8) -> Self {
        Self::new(Array2::from_elem((height, width), value))
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }
}

/// One of the three color channels of a [`ColorFrame`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
        };
        f.pad(name)
    }
}

/// Color image composed of three equally sized channel planes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorFrame {
    red: Frame,
    green: Frame,
    blue: Frame,
}

impl ColorFrame {
    /// Assemble a color frame, rejecting empty or mismatched planes.
    pub fn new(red: Frame, green: Frame, blue: Frame) -> Result<Self> {
        let expected = red.data.dim();
        if expected.0 == 0 || expected.1 == 0 {
            return Err(AutolevelsError::InvalidDimensions {
                width: expected.1,
                height: expected.0,
            });
        }
        for plane in [&green, &blue] {
            let found = plane.data.dim();
            if found != expected {
                return Err(AutolevelsError::ChannelMismatch { expected, found });
            }
        }
        Ok(Self { red, green, blue })
    }

    /// A frame where every pixel is `[r, g, b]`.
    pub fn filled(height: usize, width: usize, rgb: [u8; 3]) -> Result<Self> {
        Self::new(
            Frame::filled(height, width, rgb[0]),
            Frame::filled(height, width, rgb[1]),
            Frame::filled(height, width, rgb[2]),
        )
    }

    pub fn channel(&self, channel: Channel) -> &Frame {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    pub fn red(&self) -> &Frame {
        &self.red
    }

    pub fn green(&self) -> &Frame {
        &self.green
    }

    pub fn blue(&self) -> &Frame {
        &self.blue
    }

    pub fn width(&self) -> usize {
        self.red.width()
    }

    pub fn height(&self) -> usize {
        self.red.height()
    }

    pub fn pixel_count(&self) -> usize {
        self.red.pixel_count()
    }

    /// `[r, g, b]` at (row, col).
    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        [
            self.red.data[[row, col]],
            self.green.data[[row, col]],
            self.blue.data[[row, col]],
        ]
    }
}
