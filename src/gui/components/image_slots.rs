//! Cover image and profile photo header

use eframe::egui;

use crate::editor::{ImageSlot, MediaBridge, ProfileEditor};
use crate::gui::components::{request_image, uri_label};
use crate::gui::constants::ITEM_SPACING;

pub fn ui(ui: &mut egui::Ui, editor: &mut ProfileEditor, bridge: &MediaBridge) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        slot_row(ui, editor, bridge, ImageSlot::Cover, "Cover Image");
        ui.add_space(ITEM_SPACING / 2.0);
        slot_row(ui, editor, bridge, ImageSlot::Primary, "📷 Profile Photo");
    });
}

fn slot_row(
    ui: &mut egui::Ui,
    editor: &mut ProfileEditor,
    bridge: &MediaBridge,
    slot: ImageSlot,
    label: &str,
) {
    let uri = match slot {
        ImageSlot::Cover => editor.profile().cover_image.clone(),
        ImageSlot::Primary => editor.profile().profile_image.clone(),
        ImageSlot::Gallery => return,
    };

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).strong());
        uri_label(ui, &uri);
        if ui.button("Change").clicked() {
            request_image(editor, bridge, slot);
        }
    });
}
