//! Titled card with an edit toggle

use eframe::egui;

use crate::editor::{EditSection, ProfileEditor};
use crate::gui::constants::ITEM_SPACING;

/// Renders the card for `section`; `add_contents` draws its fields
pub fn ui(
    ui: &mut egui::Ui,
    editor: &mut ProfileEditor,
    section: EditSection,
    add_contents: impl FnOnce(&mut egui::Ui, &mut ProfileEditor),
) {
    let editing = editor.is_section_editable(section);

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(section.title()).heading().strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (label, hover) = if editing {
                    ("✔", "Save")
                } else {
                    ("✏", "Edit")
                };
                if ui.button(label).on_hover_text(hover).clicked() {
                    editor.toggle_section(section);
                }
            });
        });

        ui.add_space(ITEM_SPACING);
        add_contents(ui, editor);
    });
}
