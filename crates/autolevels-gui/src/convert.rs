use autolevels_core::frame::ColorFrame;

/// Convert a ColorFrame (three u8 planes) to an egui ColorImage.
pub fn color_frame_to_color_image(frame: &ColorFrame) -> egui::ColorImage {
    let h = frame.height();
    let w = frame.width();
    let mut pixels = Vec::with_capacity(h * w);

    for row in 0..h {
        for col in 0..w {
            let [r, g, b] = frame.pixel(row, col);
            pixels.push(egui::Color32::from_rgb(r, g, b));
        }
    }

    egui::ColorImage {
        size: [w, h],
        pixels,
        source_size: Default::default(),
    }
}
