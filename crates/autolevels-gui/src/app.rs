use anyhow::Result;
use autolevels_core::error::AutolevelsError;
use autolevels_core::frame::ColorFrame;
use autolevels_core::io::compare::side_by_side;
use tracing::{error, info, warn};

use crate::convert::color_frame_to_color_image;

/// Space reserved around the image for the panel frame.
const PANEL_MARGIN: f32 = 16.0;

/// Static two-up view of an original and a processed image.
///
/// The side-by-side frame is composed on the first update, once the
/// renderer's texture size limit is known.
pub struct CompareApp {
    original: ColorFrame,
    processed: ColorFrame,
    scale_percent: f64,
    texture: Option<egui::TextureHandle>,
    image_size: [usize; 2],
    error: Option<String>,
}

impl CompareApp {
    fn new(original: ColorFrame, processed: ColorFrame, scale_percent: f64) -> Self {
        Self {
            original,
            processed,
            scale_percent,
            texture: None,
            image_size: [0, 0],
            error: None,
        }
    }

    fn load_texture(&mut self, ctx: &egui::Context) {
        if self.texture.is_some() || self.error.is_some() {
            return;
        }

        let max_side = ctx.input(|i| i.max_texture_side);
        let scale = fit_scale(
            self.original.width() * 2,
            self.original.height(),
            self.scale_percent,
            max_side,
        );
        if scale < self.scale_percent {
            warn!(
                requested = self.scale_percent,
                scale, max_side, "Comparison exceeds the texture limit, scaling down"
            );
        }

        match side_by_side(&self.original, &self.processed, scale) {
            Ok(combined) => {
                info!(
                    width = combined.width(),
                    height = combined.height(),
                    "Showing comparison"
                );
                let image = color_frame_to_color_image(&combined);
                self.image_size = image.size;
                self.texture =
                    Some(ctx.load_texture("side-by-side", image, egui::TextureOptions::LINEAR));
            }
            Err(e) => {
                error!("Failed to compose comparison: {e}");
                self.error = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for CompareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.load_texture(ctx);
        let size = egui::vec2(self.image_size[0] as f32, self.image_size[1] as f32);
        let texture_id = self.texture.as_ref().map(|t| t.id());

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(ref message) = self.error {
                ui.colored_label(egui::Color32::RED, message);
                return;
            }
            let Some(texture_id) = texture_id else {
                return;
            };
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            ui.painter().image(
                texture_id,
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );

            let half = egui::vec2(rect.width() / 2.0, 0.0);
            draw_caption(ui, rect.left_top(), "Original");
            draw_caption(ui, rect.left_top() + half, "Processed");
        });
    }
}

/// Largest scale not above `scale_percent` at which a `width` x `height`
/// image fits in a `max_side` square texture.
fn fit_scale(width: usize, height: usize, scale_percent: f64, max_side: usize) -> f64 {
    let longest = width.max(height) as f64;
    if longest * scale_percent / 100.0 <= max_side as f64 {
        return scale_percent;
    }
    max_side as f64 * 100.0 / longest
}

fn draw_caption(ui: &egui::Ui, top_left: egui::Pos2, label: &str) {
    let label_pos = top_left + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

/// Open a window showing `original` and `processed` side by side.
///
/// Both images are scaled by `scale_percent` before display, shrunk further
/// if the pair would not fit in one texture. Blocks until the window is
/// closed.
pub fn show_side_by_side(
    original: ColorFrame,
    processed: ColorFrame,
    scale_percent: f64,
    title: &str,
) -> Result<()> {
    if !scale_percent.is_finite() || scale_percent <= 0.0 {
        return Err(AutolevelsError::InvalidScale(scale_percent).into());
    }

    let inner_size = [
        (original.width() * 2) as f32 * (scale_percent / 100.0) as f32 + PANEL_MARGIN,
        original.height() as f32 * (scale_percent / 100.0) as f32 + PANEL_MARGIN,
    ];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(inner_size)
            .with_title(title),
        ..Default::default()
    };

    let app = CompareApp::new(original, processed, scale_percent);
    eframe::run_native(title, options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Display failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_scale_keeps_scale_within_limit() {
        assert_eq!(fit_scale(2000, 1000, 100.0, 8192), 100.0);
        assert_eq!(fit_scale(2000, 1000, 50.0, 8192), 50.0);
    }

    #[test]
    fn fit_scale_shrinks_oversized_comparison() {
        // 6000x4000 photo side by side is 12000 wide.
        let scale = fit_scale(12000, 4000, 100.0, 8192);
        assert!(scale < 100.0);
        assert!((12000.0 * scale / 100.0) as usize <= 8192);
        assert!((4000.0 * scale / 100.0) as usize <= 8192);
    }
}
