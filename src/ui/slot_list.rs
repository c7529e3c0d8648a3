use crate::constant::SLOT_LABEL_MAX_CHARS;
use crate::style::{EMPTY_SLOT_FILL, FILLED_SLOT_FILL};
use crate::ui::elide::elide_middle;
use egui::{Color32, RichText, Sense, Ui};

const SLOT_HEIGHT: f32 = 20.0;

pub enum SlotAction {
    Open(String),
    Clear(usize),
}

pub struct SlotList;

impl SlotList {
    /// One row per slot. Primary click opens the URL, secondary click empties the slot.
    pub fn show(ui: &mut Ui, slots: &[Option<&str>]) -> Option<SlotAction> {
        let mut action = None;
        let width = ui.available_width();

        for (index, slot) in slots.iter().enumerate() {
            let fill = if slot.is_some() {
                FILLED_SLOT_FILL
            } else {
                EMPTY_SLOT_FILL
            };

            let frame = egui::Frame::new()
                .fill(fill)
                .inner_margin(egui::Margin::symmetric(4, 2))
                .show(ui, |ui| {
                    ui.set_width(width - 8.0);
                    ui.set_min_height(SLOT_HEIGHT);
                    if let Some(url) = slot {
                        let text = elide_middle(url, SLOT_LABEL_MAX_CHARS);
                        Some(
                            ui.add(
                                egui::Label::new(RichText::new(text).color(Color32::BLACK))
                                    .sense(Sense::click()),
                            )
                            .on_hover_text(*url),
                        )
                    } else {
                        None
                    }
                });

            if let (Some(url), Some(response)) = (slot, frame.inner) {
                if response.clicked() {
                    action = Some(SlotAction::Open(url.to_string()));
                } else if response.secondary_clicked() {
                    action = Some(SlotAction::Clear(index));
                }
            }
        }

        action
    }
}
