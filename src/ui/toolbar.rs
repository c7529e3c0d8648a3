use crate::store::CapacityOptions;
use egui::{RichText, Ui};
use std::path::PathBuf;

pub enum ToolbarAction {
    Resize(usize),
    Save,
    Load,
    LoadRecent(PathBuf),
    Clear,
}

pub struct Toolbar;

impl Toolbar {
    /// Memory size combo box of the slot list
    pub fn capacity_combo(
        ui: &mut Ui,
        options: &CapacityOptions,
        capacity: usize,
    ) -> Option<ToolbarAction> {
        let mut selected = capacity;
        egui::ComboBox::from_id_salt("memory_size")
            .selected_text(capacity.to_string())
            .width(ui.available_width() - 8.0)
            .show_ui(ui, |ui| {
                for &size in options.sizes() {
                    ui.selectable_value(&mut selected, size, size.to_string());
                }
            });

        (selected != capacity).then_some(ToolbarAction::Resize(selected))
    }

    /// Four-stop memory size slider of the queue
    pub fn capacity_slider(
        ui: &mut Ui,
        options: &CapacityOptions,
        capacity: usize,
    ) -> Option<ToolbarAction> {
        let last = options.len().saturating_sub(1);
        let mut position = options.nearest_position(capacity);

        let response = ui.add(
            egui::Slider::new(&mut position, 0..=last)
                .show_value(false)
                .step_by(1.0),
        );

        // Tick labels under the slider
        ui.horizontal(|ui| {
            for &size in options.sizes() {
                ui.label(RichText::new(size.to_string()).small());
                ui.add_space(12.0);
            }
        });

        if response.changed()
            && let Some(size) = options.at(position)
            && size != capacity
        {
            return Some(ToolbarAction::Resize(size));
        }
        None
    }

    /// Save, load (with recent files) and clear buttons stacked full width
    pub fn file_buttons(ui: &mut Ui, recent_files: &[PathBuf]) -> Option<ToolbarAction> {
        let mut action = None;
        let width = ui.available_width();

        if ui
            .add_sized([width, 24.0], egui::Button::new("Save URLs"))
            .clicked()
        {
            action = Some(ToolbarAction::Save);
        }

        ui.horizontal(|ui| {
            let load_width = if recent_files.is_empty() {
                width
            } else {
                width - 40.0
            };
            if ui
                .add_sized([load_width, 24.0], egui::Button::new("Load URLs"))
                .clicked()
            {
                action = Some(ToolbarAction::Load);
            }

            if !recent_files.is_empty() {
                ui.menu_button("🕘", |ui| {
                    for path in recent_files {
                        let file_name = path
                            .file_name()
                            .and_then(|n| n.to_str())
                            .unwrap_or("Unknown");
                        let path_str = path.to_string_lossy();
                        if ui
                            .button(file_name)
                            .on_hover_text(path_str.as_ref())
                            .clicked()
                        {
                            action = Some(ToolbarAction::LoadRecent(path.clone()));
                            ui.close();
                        }
                    }
                })
                .response
                .on_hover_text("Recent files");
            }
        });

        if let Some(clear) = Self::clear_button(ui, width) {
            action = Some(clear);
        }

        action
    }

    pub fn clear_button(ui: &mut Ui, width: f32) -> Option<ToolbarAction> {
        ui.add_sized([width, 24.0], egui::Button::new("Clear URLs"))
            .clicked()
            .then_some(ToolbarAction::Clear)
    }
}
