//! GUI-specific constants for layout and colors

use egui;

/// Layout spacing
pub const PADDING: f32 = 10.0;
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Width of the URI preview labels before they are elided
pub const URI_PREVIEW_WIDTH: f32 = 220.0;

/// Inline error text
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(230, 80, 80);

/// Save button fill (enabled / disabled)
pub const SAVE_ENABLED: egui::Color32 = egui::Color32::from_rgb(67, 196, 99);
pub const SAVE_DISABLED: egui::Color32 = egui::Color32::from_rgb(102, 102, 102);

/// Status colors
pub const STATUS_SUCCESS: egui::Color32 = egui::Color32::from_rgb(0, 200, 0);
pub const STATUS_WARNING: egui::Color32 = egui::Color32::from_rgb(200, 200, 0);
pub const STATUS_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);

/// Accent for add buttons
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(75, 90, 247);
