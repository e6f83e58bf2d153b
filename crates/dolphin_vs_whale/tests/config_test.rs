//! Configuration and resource loading from files.

use dolphin_tictactoe::Player;
use dolphin_vs_whale::{AppConfig, PlayerResources, ResourceCatalog};
use std::io::Write;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "sound_enabled = maybe").unwrap();
    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}

#[test]
fn test_custom_art_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let art_path = dir.path().join("whale.txt");
    std::fs::write(&art_path, "  ~~\n (W)\n\n\n").unwrap();

    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!("[players.whale]\nart = {:?}\n", art_path.display().to_string()),
    )
    .unwrap();

    let config = AppConfig::load(&config_path).unwrap();
    let catalog = ResourceCatalog::load(&config);
    assert_eq!(
        catalog.get(Player::Whale).art(),
        &vec!["  ~~".to_string(), " (W)".to_string()]
    );
    assert_eq!(
        catalog.get(Player::Dolphin),
        &PlayerResources::builtin(Player::Dolphin)
    );
}

#[test]
fn test_missing_art_falls_back_to_builtin() {
    let config = AppConfig::from_toml("[players.dolphin]\nart = \"/no/such/dolphin.txt\"\n").unwrap();
    let catalog = ResourceCatalog::load(&config);
    assert_eq!(catalog, ResourceCatalog::builtin());
}

#[test]
fn test_empty_art_falls_back_to_builtin() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = AppConfig::from_toml(&format!(
        "[players.whale]\nart = {:?}\n",
        file.path().display().to_string()
    ))
    .unwrap();
    assert_eq!(ResourceCatalog::load(&config), ResourceCatalog::builtin());
}
