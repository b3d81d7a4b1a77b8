//! Profile editor window implemented with egui/eframe

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{debug, info};

use crate::config::EditorConfig;
use crate::editor::{
    ArrayField, DropdownField, EditSection, MediaBridge, ProfileEditor, ProfileField, SaveOutcome,
    StatusKind,
};

use super::components::{
    image_slots, photo_gallery, profile_input, relationship_dropdown, section_card, social_links,
};
use super::constants::*;

const APP_TITLE: &str = "Create Profile";

/// Cards below the image header, top to bottom
const CARD_ORDER: [EditSection; 7] = [
    EditSection::EditProfile,
    EditSection::AboutMe,
    EditSection::CorePersonality,
    EditSection::ValuesBeliefs,
    EditSection::Achievements,
    EditSection::BucketList,
    EditSection::FavouriteBooks,
];

struct EditorApp {
    editor: ProfileEditor,
    bridge: MediaBridge,
}

impl EditorApp {
    fn new(cc: &CreationContext<'_>, editor: ProfileEditor, mut bridge: MediaBridge) -> Self {
        let ctx = cc.egui_ctx.clone();
        bridge.set_notifier(move || ctx.request_repaint());

        info!(display_name = %editor.profile().display_name, "Profile editor opened");
        Self { editor, bridge }
    }

    fn apply_image_selections(&mut self) {
        for selection in self.bridge.drain() {
            let applied = self
                .editor
                .complete_image_request(selection.request, selection.uri);
            debug!(id = selection.request.id, applied, "Applied image selection");
        }
    }

    fn render_save_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("save_bar").show(ctx, |ui| {
            ui.add_space(ITEM_SPACING);

            let can_save = self.editor.can_save();
            let fill = if can_save { SAVE_ENABLED } else { SAVE_DISABLED };
            let button = egui::Button::new(
                egui::RichText::new("Save Profile")
                    .strong()
                    .color(egui::Color32::WHITE),
            )
            .fill(fill)
            .min_size(egui::vec2(ui.available_width(), 36.0));

            if ui.add_enabled(can_save, button).clicked() {
                match self.editor.request_save() {
                    SaveOutcome::Saved => info!("Profile saved from editor"),
                    SaveOutcome::Blocked => debug!("Save blocked by validation"),
                    SaveOutcome::Failed(reason) => debug!(%reason, "Save failed"),
                    SaveOutcome::Closed => debug!("Save ignored after close"),
                }
            }

            if let Some(status) = self.editor.status() {
                let color = match status.kind {
                    StatusKind::Success => STATUS_SUCCESS,
                    StatusKind::Warning => STATUS_WARNING,
                    StatusKind::Error => STATUS_ERROR,
                };
                ui.colored_label(color, &status.text);
            }

            ui.add_space(ITEM_SPACING);
        });
    }

    fn render_header(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            if ui.button("⬅").on_hover_text("Back").clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            ui.heading(APP_TITLE);
        });
    }

    fn render_card(&mut self, ui: &mut egui::Ui, section: EditSection) {
        section_card::ui(ui, &mut self.editor, section, |ui, editor| {
            if section == EditSection::ValuesBeliefs {
                profile_input::array_ui(ui, editor, ArrayField::CoreValues);
            }

            for field in ProfileField::in_section(section) {
                profile_input::ui(ui, editor, field);
            }

            if section == EditSection::EditProfile {
                relationship_dropdown::field_button(ui, editor, DropdownField::Relationship);
            }
        });
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_image_selections();
        self.render_save_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(PADDING);
                self.render_header(ui, ctx);
                ui.add_space(SECTION_SPACING);

                image_slots::ui(ui, &mut self.editor, &self.bridge);
                ui.add_space(SECTION_SPACING);

                for section in CARD_ORDER {
                    self.render_card(ui, section);
                    ui.add_space(SECTION_SPACING);
                }

                photo_gallery::ui(ui, &mut self.editor, &self.bridge);
                ui.add_space(SECTION_SPACING);

                section_card::ui(ui, &mut self.editor, EditSection::SocialLinks, |ui, editor| {
                    social_links::ui(ui, editor);
                });
                ui.add_space(PADDING);
            });
        });

        relationship_dropdown::modal(ctx, &mut self.editor);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.editor.close();
        info!("Profile editor exiting");
    }
}

pub fn run_gui(config: &EditorConfig, editor: ProfileEditor, bridge: MediaBridge) -> Result<()> {
    let window = &config.window;
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([f32::from(window.width), f32::from(window.height)])
            .with_min_inner_size([f32::from(window.min_width), f32::from(window.min_height)])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(EditorApp::new(cc, editor, bridge)))),
    )
    .map_err(|err| anyhow!("Failed to launch profile editor window: {err}"))
}
