//! Dolphin vs Whale - terminal entry point.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use dolphin_vs_whale::AppConfig;
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play => {
            init_file_tracing(&cli.log_file)?;
            let config = load_config(&cli.config, cli.mute)?;
            dolphin_vs_whale::run(&config)
        }
        Command::Config => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
            let config = load_config(&cli.config, cli.mute)?;
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

#[instrument(skip(path), fields(path = %path.display()))]
fn load_config(path: &Path, mute: bool) -> Result<AppConfig> {
    let config = AppConfig::load(path)?;
    let config = if mute { config.muted() } else { config };
    info!(sound_enabled = config.sound_enabled(), "Configuration ready");
    Ok(config)
}

/// Logs go to a file so they do not interfere with the TUI.
fn init_file_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
