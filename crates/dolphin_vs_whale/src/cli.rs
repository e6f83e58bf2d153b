//! Command-line interface for dolphin_vs_whale.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dolphin vs Whale - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "dolphin_vs_whale")]
#[command(about = "Two-player tic-tac-toe: dolphin vs whale", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = dolphin_vs_whale::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Disable move sounds
    #[arg(long, global = true)]
    pub mute: bool,

    /// Where to write logs while the game owns the terminal
    #[arg(long, global = true, default_value = "dolphin_vs_whale.log")]
    pub log_file: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Play a game in the terminal
    #[default]
    Play,

    /// Print the effective configuration as TOML
    Config,
}
