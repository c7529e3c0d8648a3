use egui::{Color32, Context, Stroke, Style, Visuals};

/// Background of a slot that holds no URL
pub const EMPTY_SLOT_FILL: Color32 = Color32::GRAY;
pub const FILLED_SLOT_FILL: Color32 = Color32::WHITE;

pub fn configure_style(ctx: &Context) {
    let mut style = Style::default();

    style.spacing.item_spacing = egui::vec2(6.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(10);

    ctx.set_style(style);

    let mut visuals = Visuals::light();
    visuals.window_shadow = egui::epaint::Shadow::NONE;
    visuals.popup_shadow = egui::epaint::Shadow::NONE;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(0.0, Color32::TRANSPARENT);
    visuals.widgets.hovered.bg_fill = Color32::from_gray(240);
    visuals.widgets.active.bg_fill = Color32::from_gray(230);

    visuals.selection.bg_fill = Color32::from_rgb(200, 220, 255);
    visuals.selection.stroke = Stroke::new(1.0, Color32::from_rgb(100, 100, 100));

    ctx.set_visuals(visuals);
}

/// Green when empty, red when full
pub fn fullness_color(fullness: f32) -> Color32 {
    let fullness = if fullness.is_nan() {
        0.0
    } else {
        fullness.clamp(0.0, 1.0)
    };
    let red = (255.0 * fullness) as u8;
    let green = 255 - red;
    Color32::from_rgb(red, green, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullness_color_ramp() {
        assert_eq!(fullness_color(0.0), Color32::from_rgb(0, 255, 0));
        assert_eq!(fullness_color(1.0), Color32::from_rgb(255, 0, 0));
        assert_eq!(fullness_color(0.5), Color32::from_rgb(127, 128, 0));
    }

    #[test]
    fn test_fullness_color_clamps() {
        assert_eq!(fullness_color(-1.0), fullness_color(0.0));
        assert_eq!(fullness_color(3.0), fullness_color(1.0));
        assert_eq!(fullness_color(f32::NAN), fullness_color(0.0));
    }
}
