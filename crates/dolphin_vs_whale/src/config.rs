//! Application configuration.
//!
//! Settings live in a TOML file. Every field has a default, so a missing
//! file or a partial one is fine; only an unreadable or malformed file is
//! an error.

use derive_getters::Getters;
use derive_more::{Display, Error};
use dolphin_tictactoe::Player;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "dolphin_vs_whale.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Play a cue on every move.
    sound_enabled: bool,

    /// Redraw interval in milliseconds.
    tick_rate_ms: u64,

    /// How long the "Good job!" overlay spins after the summary closes.
    celebration_ms: u64,

    /// How long the status line twirls after the game ends.
    status_twirl_ms: u64,

    /// Per-player art and sound.
    players: PlayerAssets,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            tick_rate_ms: 50,
            // Four 1.6s turns.
            celebration_ms: 6_400,
            // Two 1.2s turns.
            status_twirl_ms: 2_400,
            players: PlayerAssets::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file, falling back to defaults if
    /// the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Loads configuration from an existing TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(sound_enabled = config.sound_enabled, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to render config: {}", e)))
    }

    /// Turns every sound cue off.
    pub fn muted(mut self) -> Self {
        self.sound_enabled = false;
        self
    }
}

/// Art and sound settings for both players.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerAssets {
    /// Settings for the dolphin.
    dolphin: PlayerAssetConfig,
    /// Settings for the whale.
    whale: PlayerAssetConfig,
}

impl PlayerAssets {
    /// Settings for one player.
    pub fn for_player(&self, player: Player) -> &PlayerAssetConfig {
        match player {
            Player::Dolphin => &self.dolphin,
            Player::Whale => &self.whale,
        }
    }
}

/// Optional resources bound to one player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerAssetConfig {
    /// Text file with glyph art drawn in the player's cells.
    #[serde(skip_serializing_if = "Option::is_none")]
    art: Option<PathBuf>,

    /// Command spawned (not awaited) each time the player moves,
    /// e.g. `["aplay", "-q", "dolphin.wav"]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    sound_command: Option<Vec<String>>,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
