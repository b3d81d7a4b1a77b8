//! Labelled text inputs bound to profile fields

use eframe::egui;

use crate::editor::{ArrayField, ProfileEditor, ProfileField};
use crate::gui::components::{error_label, report};
use crate::gui::constants::ITEM_SPACING;

/// Text input for a scalar field; read-only unless its section is open
pub fn ui(ui: &mut egui::Ui, editor: &mut ProfileEditor, field: ProfileField) {
    let editable = editor.is_field_editable(field);
    let mut value = editor.profile().text(field).to_string();

    ui.label(field.label());
    let text_edit = if field.is_multiline() {
        egui::TextEdit::multiline(&mut value).desired_rows(3)
    } else {
        egui::TextEdit::singleline(&mut value)
    }
    .desired_width(f32::INFINITY);

    if ui.add_enabled(editable, text_edit).changed() {
        report(editor.update_field(field, value));
    }

    if let Some(key) = field.validated() {
        error_label(ui, editor, key);
    }
    ui.add_space(ITEM_SPACING);
}

/// Comma-separated input for a sequence field
pub fn array_ui(ui: &mut egui::Ui, editor: &mut ProfileEditor, field: ArrayField) {
    let editable = editor.is_section_editable(field.section());
    let mut text = editor.array_field_text(field);

    ui.label(field.label());
    let text_edit = egui::TextEdit::singleline(&mut text)
        .hint_text("kindness, honesty, ...")
        .desired_width(f32::INFINITY);

    let response = ui.add_enabled(editable, text_edit);
    if response.changed() {
        report(editor.update_array_field(field, &text));
    }
    if response.lost_focus() {
        editor.finish_array_edit();
    }

    error_label(ui, editor, field.validated());
    ui.add_space(ITEM_SPACING);
}
