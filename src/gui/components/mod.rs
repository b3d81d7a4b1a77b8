//! Widgets for the profile screen
//!
//! Components read from the editor and call its operations; none of them
//! keep profile state of their own.

pub mod image_slots;
pub mod photo_gallery;
pub mod profile_input;
pub mod relationship_dropdown;
pub mod section_card;
pub mod social_links;

use eframe::egui;
use tracing::warn;

use crate::editor::{EditError, ImageSlot, MediaBridge, ProfileEditor, ValidatedField};
use crate::gui::constants::{ERROR_TEXT, URI_PREVIEW_WIDTH};

/// Inline error under a field, if the field has one
pub fn error_label(ui: &mut egui::Ui, editor: &ProfileEditor, field: ValidatedField) {
    if let Some(message) = editor.error_message(field) {
        ui.colored_label(ERROR_TEXT, message);
    }
}

/// Elided resource locator
pub fn uri_label(ui: &mut egui::Ui, uri: &str) {
    ui.add_sized([URI_PREVIEW_WIDTH, 18.0], egui::Label::new(uri).truncate())
        .on_hover_text(uri);
}

/// Start an image pick for `slot`
pub fn request_image(editor: &mut ProfileEditor, bridge: &MediaBridge, slot: ImageSlot) {
    if let Some(request) = editor.begin_image_request(slot) {
        bridge.dispatch(request);
    }
}

/// Log an edit the editor refused
pub fn report(result: Result<(), EditError>) {
    if let Err(err) = result {
        warn!(error = %err, "Edit rejected");
    }
}
