//! Single-choice dropdown: the field button and its option modal

use eframe::egui;

use crate::editor::{DropdownField, ProfileEditor};
use crate::gui::constants::ITEM_SPACING;

/// Button showing the current value; opens the option modal
pub fn field_button(ui: &mut egui::Ui, editor: &mut ProfileEditor, field: DropdownField) {
    ui.label(field.label());
    let value = editor.dropdown_value(field);
    let button = egui::Button::new(format!("{value}  ⏷"))
        .min_size(egui::vec2(ui.available_width(), 0.0));
    if ui.add(button).clicked() {
        editor.open_dropdown(field);
    }
    ui.add_space(ITEM_SPACING);
}

/// Option list for whichever dropdown is open
pub fn modal(ctx: &egui::Context, editor: &mut ProfileEditor) {
    let Some(field) = editor.dropdown().active() else {
        return;
    };

    let mut open = true;
    let mut cancelled = false;
    let mut picked = None;

    egui::Window::new(field.label())
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            let current = editor.dropdown_value(field);
            for option in editor.dropdown_options(field) {
                if ui.selectable_label(*option == current, *option).clicked() {
                    picked = Some(*option);
                }
            }

            ui.add_space(ITEM_SPACING);
            if ui.button("Cancel").clicked() {
                cancelled = true;
            }
        });

    if let Some(option) = picked {
        editor.select_dropdown_option(field, option);
    } else if cancelled || !open {
        editor.dismiss_dropdown();
    }
}
