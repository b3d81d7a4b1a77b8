//! Photo gallery card

use eframe::egui;
use tracing::warn;

use crate::editor::{ImageSlot, MediaBridge, ProfileEditor};
use crate::gui::components::{request_image, uri_label};
use crate::gui::constants::{ACCENT, ITEM_SPACING};

pub fn ui(ui: &mut egui::Ui, editor: &mut ProfileEditor, bridge: &MediaBridge) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("Photo Gallery").heading().strong());
        ui.add_space(ITEM_SPACING);

        let mut to_remove = None;
        for (idx, photo) in editor.profile().photo_gallery.as_slice().iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(format!("{}.", idx + 1));
                uri_label(ui, &photo.uri);
                if ui.small_button("✖").on_hover_text("Remove photo").clicked() {
                    to_remove = Some(idx);
                }
            });
        }

        if editor.profile().photo_gallery.is_empty() {
            ui.label(egui::RichText::new("(No photos yet)").italics().weak());
        }

        if let Some(idx) = to_remove {
            if let Err(err) = editor.remove_gallery_photo(idx) {
                warn!(index = idx, error = %err, "Failed to remove gallery photo");
            }
        }

        ui.add_space(ITEM_SPACING);
        let pending = editor.pending_image_requests();
        ui.horizontal(|ui| {
            if ui.button(egui::RichText::new("➕ Add Photo").color(ACCENT)).clicked() {
                request_image(editor, bridge, ImageSlot::Gallery);
            }
            if pending > 0 {
                ui.spinner();
                ui.weak(format!("{pending} pick(s) pending"));
            }
        });
    });
}
