use crate::style::fullness_color;
use egui::{Align2, Color32, FontId, Sense, Ui};

const PILL_HEIGHT: f32 = 50.0;
const PILL_RADIUS: f32 = 20.0;

pub struct QueueStatus;

impl QueueStatus {
    /// Paint the `len/capacity` pill; returns true when it was clicked
    pub fn show(ui: &mut Ui, len: usize, capacity: usize, fullness: f32) -> bool {
        let size = egui::vec2(ui.available_width(), PILL_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, PILL_RADIUS, fullness_color(fullness));
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                format!("{}/{}", len, capacity),
                FontId::proportional(16.0),
                Color32::BLACK,
            );
        }

        let hover = if len == 0 {
            "Queue is empty"
        } else {
            "Open the oldest URL"
        };
        response.on_hover_text(hover).clicked()
    }
}
