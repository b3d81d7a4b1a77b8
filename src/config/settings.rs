//! Editor settings file
//!
//! JSON document under the user's config directory holding window geometry,
//! the log level and an optional seed profile to mount the editor with.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, Level};

use crate::editor::Profile;

/// Top-level editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Profile the screen mounts with; the built-in seed when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_profile: Option<Profile>,
}

/// Editor window geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSettings {
    #[serde(default = "default_window_width")]
    pub width: u16,
    #[serde(default = "default_window_height")]
    pub height: u16,
    #[serde(default = "default_min_width")]
    pub min_width: u16,
    #[serde(default = "default_min_height")]
    pub min_height: u16,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_window_width() -> u16 {
    480
}

fn default_window_height() -> u16 {
    900
}

fn default_min_width() -> u16 {
    360
}

fn default_min_height() -> u16 {
    600
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            min_width: default_min_width(),
            min_height: default_min_height(),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            log_level: default_log_level(),
            seed_profile: None,
        }
    }
}

impl EditorConfig {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        path
    }

    /// Load from the default location, writing defaults if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "Config file not found, creating default config");
            let config = EditorConfig::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: EditorConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON from {:?}", path))?;

        info!(path = %path.display(), custom_seed = config.seed_profile.is_some(), "Loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?;

        fs::write(path, json).with_context(|| format!("Failed to write config to {:?}", path))?;

        info!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Profile to mount the editor with
    pub fn seed(&self) -> Profile {
        self.seed_profile.clone().unwrap_or_else(Profile::seed)
    }
}

/// Resolve the tracing level: CLI flag, then environment, then config file
pub fn resolve_log_level(cli: Option<&str>, env: Option<&str>, config: &str) -> Level {
    let chosen = cli.or(env).unwrap_or(config);
    match chosen.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
