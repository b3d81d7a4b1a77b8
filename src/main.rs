#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use profile_editor::config::{resolve_log_level, EditorConfig};
use profile_editor::constants::config::LOG_LEVEL_ENV;
use profile_editor::editor::{FileDialogPicker, MediaBridge, MemoryStore, ProfileEditor};
use profile_editor::gui::run_gui;

#[derive(Debug, Parser)]
#[command(version, about = "Edit a dating-app style user profile")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EditorConfig::load_from(path)?,
        None => EditorConfig::load()?,
    };

    let env_level = std::env::var(LOG_LEVEL_ENV).ok();
    let log_level = resolve_log_level(
        cli.log_level.as_deref(),
        env_level.as_deref(),
        &config.log_level,
    );

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    if cli.print_config {
        let json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize config to JSON")?;
        println!("{json}");
        return Ok(());
    }

    // Media picks run here; eframe keeps the main thread
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("Failed to start media runtime")?;

    let bridge = MediaBridge::new(Arc::new(FileDialogPicker), runtime.handle().clone());
    let editor = ProfileEditor::mount(config.seed(), MemoryStore::new());

    info!(level = %log_level, "Starting profile editor");
    run_gui(&config, editor, bridge)?;

    runtime.shutdown_background();
    Ok(())
}
