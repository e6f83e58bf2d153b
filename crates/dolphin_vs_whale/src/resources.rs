//! Per-player presentation resources.
//!
//! The rules engine only knows [`Player`] identities. The glyph art and
//! colour drawn for a player are looked up here by identity.
//! Art can be overridden from files; a file that cannot be used falls back
//! to the built-in art and play continues.

use derive_getters::Getters;
use derive_more::{Display, Error};
use dolphin_tictactoe::Player;
use ratatui::style::Color;
use std::path::Path;
use tracing::{debug, instrument, warn};

use crate::config::AppConfig;

/// Lines of art that fit in one cell.
pub const ART_HEIGHT: usize = 3;

const DOLPHIN_ART: [&str; ART_HEIGHT] = [r"    __", r" ~~/o \__", r"   \__/"];
const WHALE_ART: [&str; ART_HEIGHT] = [r"   .-~-.", r" (  o   )>", r"  `~~~~'"];

/// What the UI draws for one player.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PlayerResources {
    /// Glyph art, at most [`ART_HEIGHT`] lines.
    art: Vec<String>,
    /// Foreground colour for marks.
    color: Color,
}

impl PlayerResources {
    /// Built-in resources for a player.
    pub fn builtin(player: Player) -> Self {
        let (art, color) = match player {
            Player::Dolphin => (DOLPHIN_ART, Color::Rgb(0x00, 0x7a, 0x99)),
            Player::Whale => (WHALE_ART, Color::Rgb(0x1f, 0x3f, 0xa8)),
        };
        Self {
            art: art.iter().map(|line| line.to_string()).collect(),
            color,
        }
    }

    /// Replaces the art, keeping the colour.
    pub fn with_art(mut self, art: Vec<String>) -> Self {
        self.art = art;
        self
    }
}

/// Maps each player to its resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCatalog {
    dolphin: PlayerResources,
    whale: PlayerResources,
}

impl Default for ResourceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ResourceCatalog {
    /// Catalog with only built-in resources.
    pub fn builtin() -> Self {
        Self {
            dolphin: PlayerResources::builtin(Player::Dolphin),
            whale: PlayerResources::builtin(Player::Whale),
        }
    }

    /// Catalog with art overrides from the configuration.
    ///
    /// Never fails: unusable art files are logged and skipped.
    #[instrument(skip(config))]
    pub fn load(config: &AppConfig) -> Self {
        let resources = |player: Player| {
            let builtin = PlayerResources::builtin(player);
            match config.players().for_player(player).art() {
                None => builtin,
                Some(path) => match load_art(path) {
                    Ok(art) => {
                        debug!(%player, path = %path.display(), "Loaded custom art");
                        builtin.with_art(art)
                    }
                    Err(e) => {
                        warn!(%player, error = %e, "Falling back to built-in art");
                        builtin
                    }
                },
            }
        };
        Self {
            dolphin: resources(Player::Dolphin),
            whale: resources(Player::Whale),
        }
    }

    /// Resources for a player.
    pub fn get(&self, player: Player) -> &PlayerResources {
        match player {
            Player::Dolphin => &self.dolphin,
            Player::Whale => &self.whale,
        }
    }
}

/// Art file could not be used.
#[derive(Debug, Clone, Display, Error)]
#[display("Resource error: {} at {}:{}", message, file, line)]
pub struct ResourceError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ResourceError {
    /// Creates a new resource error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Reads up to [`ART_HEIGHT`] lines of art, dropping trailing blank lines.
#[instrument(skip(path), fields(path = %path.display()))]
fn load_art(path: &Path) -> Result<Vec<String>, ResourceError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ResourceError::new(format!("Failed to read {}: {}", path.display(), e)))?;
    let mut art: Vec<String> = content
        .lines()
        .take(ART_HEIGHT)
        .map(|line| line.trim_end().to_string())
        .collect();
    while art.last().is_some_and(|line| line.is_empty()) {
        art.pop();
    }
    if art.is_empty() {
        return Err(ResourceError::new(format!("{} is empty", path.display())));
    }
    Ok(art)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_art_fits_a_cell() {
        for player in [Player::Dolphin, Player::Whale] {
            let resources = PlayerResources::builtin(player);
            assert_eq!(resources.art().len(), ART_HEIGHT);
            assert!(resources.art().iter().all(|line| !line.trim().is_empty()));
        }
    }

    #[test]
    fn test_catalog_distinguishes_players() {
        let catalog = ResourceCatalog::builtin();
        assert_ne!(catalog.get(Player::Dolphin), catalog.get(Player::Whale));
    }

    #[test]
    fn test_missing_art_file_is_an_error() {
        let err = load_art(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.message.starts_with("Failed to read"));
    }
}
