use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::Result;
use crate::frame::{Channel, ColorFrame, Frame};

/// Apply a function to each channel of a color frame independently.
///
/// Frames of at least [`PARALLEL_PIXEL_THRESHOLD`] pixels run the three calls on
/// the Rayon pool. Results come back in R, G, B order either way.
pub fn map_channels<T, F>(color: &ColorFrame, process_fn: F) -> [T; 3]
where
    T: Send,
    F: Fn(Channel, &Frame) -> T + Sync,
{
    let run = |channel: Channel| process_fn(channel, color.channel(channel));

    if color.pixel_count() >= PARALLEL_PIXEL_THRESHOLD {
        let (red, (green, blue)) = rayon::join(
            || run(Channel::Red),
            || rayon::join(|| run(Channel::Green), || run(Channel::Blue)),
        );
        [red, green, blue]
    } else {
        Channel::ALL.map(run)
    }
}

/// Create a ColorFrame from three planes in R, G, B order.
pub fn from_channels(planes: [Frame; 3]) -> Result<ColorFrame> {
    let [red, green, blue] = planes;
    ColorFrame::new(red, green, blue)
}
