//! Per-move sound cues.
//!
//! Cues are fire-and-forget: [`SoundCue::play`] returns immediately and a
//! cue that fails only logs. Game progression never waits on audio.

use dolphin_tictactoe::Player;
use std::cell::RefCell;
use std::io::Write;
use std::process::{Child, Command, Stdio};
use tracing::{debug, instrument, warn};

use crate::config::AppConfig;

/// Something that makes a noise when a player moves.
pub trait SoundCue {
    /// Starts the cue for `player` without waiting for it to finish.
    fn play(&self, player: Player);
}

/// Rings the terminal bell; the whale rings twice.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl SoundCue for TerminalBell {
    #[instrument(skip(self))]
    fn play(&self, player: Player) {
        let bells = match player {
            Player::Dolphin => "\x07",
            Player::Whale => "\x07\x07",
        };
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(bells.as_bytes()).and_then(|()| stdout.flush()) {
            warn!(error = %e, "Failed to ring terminal bell");
        }
    }
}

/// Spawns an external command, e.g. an audio player with a sound file.
///
/// Children are never waited on. Finished ones are reaped with a
/// non-blocking check each time the cue plays again.
#[derive(Debug)]
pub struct CommandSound {
    argv: Vec<String>,
    running: RefCell<Vec<Child>>,
}

impl CommandSound {
    /// Creates a cue from a non-empty argv.
    pub fn new(argv: Vec<String>) -> Option<Self> {
        if argv.is_empty() {
            None
        } else {
            Some(Self {
                argv,
                running: RefCell::new(Vec::new()),
            })
        }
    }

    /// Number of started commands not yet seen to exit.
    pub fn running(&self) -> usize {
        self.running.borrow().len()
    }

    /// Collects exit statuses of finished commands without blocking.
    pub fn reap(&self) {
        self.running.borrow_mut().retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                debug!(pid = child.id(), %status, "Sound command finished");
                false
            }
            Ok(None) => true,
            Err(e) => {
                warn!(pid = child.id(), error = %e, "Failed to poll sound command");
                false
            }
        });
    }
}

impl SoundCue for CommandSound {
    #[instrument(skip(self), fields(command = %self.argv[0]))]
    fn play(&self, player: Player) {
        self.reap();
        let spawned = Command::new(&self.argv[0])
            .args(&self.argv[1..])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => {
                debug!(pid = child.id(), "Sound command started");
                self.running.borrow_mut().push(child);
            }
            Err(e) => warn!(error = %e, "Failed to start sound command"),
        }
    }
}

/// Makes no sound.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundCue for Silent {
    fn play(&self, _player: Player) {}
}

/// The cue for each player.
pub struct SoundBoard {
    dolphin: Box<dyn SoundCue>,
    whale: Box<dyn SoundCue>,
}

impl std::fmt::Debug for SoundBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundBoard").finish_non_exhaustive()
    }
}

impl SoundBoard {
    /// Creates a board from explicit cues.
    pub fn new(dolphin: Box<dyn SoundCue>, whale: Box<dyn SoundCue>) -> Self {
        Self { dolphin, whale }
    }

    /// No sound for anyone.
    pub fn silent() -> Self {
        Self::new(Box::new(Silent), Box::new(Silent))
    }

    /// Builds cues from configuration: a configured command if present,
    /// otherwise the terminal bell, or silence when sound is disabled.
    #[instrument(skip(config))]
    pub fn from_config(config: &AppConfig) -> Self {
        if !config.sound_enabled() {
            debug!("Sound disabled");
            return Self::silent();
        }
        let cue = |player: Player| -> Box<dyn SoundCue> {
            match config
                .players()
                .for_player(player)
                .sound_command()
                .clone()
                .and_then(CommandSound::new)
            {
                Some(command) => Box::new(command),
                None => Box::new(TerminalBell),
            }
        };
        Self::new(cue(Player::Dolphin), cue(Player::Whale))
    }

    /// Plays the cue for `player`.
    pub fn play(&self, player: Player) {
        match player {
            Player::Dolphin => self.dolphin.play(player),
            Player::Whale => self.whale.play(player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_is_not_a_cue() {
        assert!(CommandSound::new(Vec::new()).is_none());
    }

    #[test]
    fn test_missing_command_does_not_panic() {
        let cue = CommandSound::new(vec!["/no/such/sound-player".to_string()]).unwrap();
        cue.play(Player::Whale);
        assert_eq!(cue.running(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_finished_commands_are_reaped() {
        let cue = CommandSound::new(vec!["true".to_string()]).unwrap();
        cue.play(Player::Dolphin);
        cue.play(Player::Whale);
        assert!(cue.running() <= 2);

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        while cue.running() > 0 && std::time::Instant::now() < deadline {
            std::thread::sleep(std::time::Duration::from_millis(10));
            cue.reap();
        }
        assert_eq!(cue.running(), 0);
    }
}
