use crate::config::StoreMode;
use crate::constant::{
    QUEUE_WINDOW_HEIGHT, QUEUE_WINDOW_WIDTH, SLOTS_WINDOW_HEIGHT, SLOTS_WINDOW_WIDTH,
};

pub fn build_viewport(mode: StoreMode) -> eframe::NativeOptions {
    let viewport = match mode {
        // The slot column has a fixed size
        StoreMode::Slots => egui::ViewportBuilder::default()
            .with_inner_size([SLOTS_WINDOW_WIDTH, SLOTS_WINDOW_HEIGHT])
            .with_resizable(false),
        StoreMode::Queue => egui::ViewportBuilder::default()
            .with_inner_size([QUEUE_WINDOW_WIDTH, QUEUE_WINDOW_HEIGHT])
            .with_min_inner_size([200.0, 150.0])
            .with_resizable(true),
    };

    eframe::NativeOptions {
        viewport: viewport.with_drag_and_drop(true),
        ..Default::default()
    }
}
