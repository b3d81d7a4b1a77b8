//! Social link rows plus the "add new" entry

use eframe::egui;
use tracing::warn;

use crate::editor::{EditSection, ProfileEditor, ValidatedField};
use crate::gui::components::{error_label, report};
use crate::gui::constants::{ACCENT, ITEM_SPACING};

pub fn ui(ui: &mut egui::Ui, editor: &mut ProfileEditor) {
    let editable = editor.is_section_editable(EditSection::SocialLinks);
    let links = editor.profile().social_links.as_slice().to_vec();
    let mut to_remove = None;

    for (idx, link) in links.into_iter().enumerate() {
        ui.horizontal(|ui| {
            ui.label(format!("Social Media Link {}", idx + 1));

            let mut value = link;
            let text_edit = egui::TextEdit::singleline(&mut value).hint_text("@yourhandle");
            if ui.add_enabled(editable, text_edit).changed() {
                report(editor.update_social_link(idx, value));
            }

            if ui.add_enabled(editable, egui::Button::new("✖")).clicked() {
                to_remove = Some(idx);
            }
        });
    }

    if let Some(idx) = to_remove {
        if let Err(err) = editor.remove_social_link(idx) {
            warn!(index = idx, error = %err, "Failed to remove social link");
        }
    }

    ui.add_space(ITEM_SPACING / 2.0);

    ui.horizontal(|ui| {
        ui.label("Add New Social Media Link");

        let mut draft = editor.new_social_link().to_string();
        let text_edit = egui::TextEdit::singleline(&mut draft).hint_text("Add new link...");
        let response = ui.add_enabled(editable, text_edit);
        if response.changed() {
            editor.set_new_social_link(draft);
        }

        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = ui
            .add_enabled(editable, egui::Button::new(egui::RichText::new("➕").color(ACCENT)))
            .clicked();

        if submitted || clicked {
            if let Err(err) = editor.commit_new_social_link() {
                warn!(error = %err, "Failed to add social link");
            }
        }
    });

    error_label(ui, editor, ValidatedField::SocialLinks);
}
