//! Dolphin vs Whale - two-player tic-tac-toe in the terminal.
//!
//! This crate is the presentation layer over
//! [`dolphin_tictactoe`]: it maps pointer and key input to moves, plays a
//! cue for each move, announces the result, celebrates, and offers a new
//! game.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with defaults for every field
//! - **Resources**: per-player art and colours, looked up by identity
//! - **Sound**: fire-and-forget per-move cues
//! - **TUI**: ratatui rendering, crossterm input, and the [`App`] adapter
//!
//! # Example
//!
//! ```no_run
//! use dolphin_vs_whale::{AppConfig, run};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AppConfig::load("dolphin_vs_whale.toml")?;
//! run(&config)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod resources;
mod sound;
mod theme;
mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE, PlayerAssetConfig, PlayerAssets};

// Crate-level exports - Presentation resources
pub use resources::{ART_HEIGHT, PlayerResources, ResourceCatalog, ResourceError};
pub use sound::{CommandSound, Silent, SoundBoard, SoundCue, TerminalBell};
pub use theme::Theme;

// Crate-level exports - Terminal UI
pub use tui::{
    Action, App, CELL_HEIGHT, CELL_WIDTH, Celebration, Direction, SPIN_FRAMES, SPIN_PERIOD,
    ScreenLayout, TWIRL_PERIOD, Target, center_rect, draw, key_action, move_cursor, run,
    turn_text,
};
