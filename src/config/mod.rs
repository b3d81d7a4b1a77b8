//! Configuration management for the profile editor
//!
//! - **settings**: `EditorConfig` JSON file (window, log level, seed profile)

pub mod settings;

// Re-export commonly used types
pub use settings::{resolve_log_level, EditorConfig, WindowSettings};
