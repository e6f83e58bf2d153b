//! Application state and the adapter between terminal events and the
//! rules engine.
//!
//! Events flow one way: input becomes an [`Action`], actions call into
//! [`GameState`], and the returned [`MoveOutcome`] decides what the UI
//! shows and plays next. The engine never calls back into the UI.

use crossterm::event::{Event, MouseButton, MouseEventKind};
use dolphin_tictactoe::{GameState, MoveOutcome, Player, Position, winning_line};
use std::time::Duration;
use tracing::{debug, info, instrument};

use super::animation::Celebration;
use super::input::{Action, key_action, move_cursor};
use super::layout::{ScreenLayout, Target};
use crate::config::AppConfig;
use crate::resources::ResourceCatalog;
use crate::sound::SoundBoard;
use crate::theme::Theme;

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    resources: ResourceCatalog,
    sounds: SoundBoard,
    theme: Theme,
    cursor: Position,
    status_message: String,
    modal: Option<String>,
    celebration: Celebration,
    layout: Option<ScreenLayout>,
    should_quit: bool,
}

impl App {
    /// Creates an application from explicit collaborators.
    pub fn new(resources: ResourceCatalog, sounds: SoundBoard, celebration: Celebration) -> Self {
        let game = GameState::new();
        Self {
            status_message: turn_text(game.current_player()),
            game,
            resources,
            sounds,
            theme: Theme::default(),
            cursor: Position::CENTER,
            modal: None,
            celebration,
            layout: None,
            should_quit: false,
        }
    }

    /// Creates an application from configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &AppConfig) -> Self {
        let celebration = Celebration::new(
            Duration::from_millis(*config.status_twirl_ms()),
            Duration::from_millis(*config.celebration_ms()),
        );
        Self::new(
            ResourceCatalog::load(config),
            SoundBoard::from_config(config),
            celebration,
        )
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Per-player resources.
    pub fn resources(&self) -> &ResourceCatalog {
        &self.resources
    }

    /// Colour palette.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Text of the status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// End-of-game summary, while it is shown.
    pub fn modal(&self) -> Option<&str> {
        self.modal.as_deref()
    }

    /// Celebration animation state.
    pub fn celebration(&self) -> &Celebration {
        &self.celebration
    }

    /// Cells of the completed line, if the game was won.
    pub fn winning_cells(&self) -> Option<[Position; 3]> {
        winning_line(self.game.board())
    }

    /// Whether the "Play Again" button is offered.
    pub fn can_play_again(&self) -> bool {
        self.game.status().is_over()
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the layout of the last drawn frame for pointer hit testing.
    pub fn set_layout(&mut self, layout: ScreenLayout) {
        self.layout = Some(layout);
    }

    /// Advances animations.
    pub fn on_tick(&mut self, dt: Duration) {
        self.celebration.tick(dt);
    }

    /// Handles a raw terminal event.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: Event) {
        let action = match event {
            Event::Key(key) => key_action(key, self.modal.is_some()),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                self.click_action(mouse.column, mouse.row)
            }
            _ => None,
        };
        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    fn click_action(&self, column: u16, row: u16) -> Option<Action> {
        if self.modal.is_some() {
            return Some(Action::DismissModal);
        }
        let target = self.layout.as_ref()?.hit_test(column, row)?;
        debug!(?target, column, row, "Pointer hit");
        match target {
            Target::Cell(pos) => Some(Action::Select(pos)),
            Target::PlayAgain if self.can_play_again() => Some(Action::PlayAgain),
            Target::PlayAgain => None,
            Target::Exit => Some(Action::Exit),
        }
    }

    /// Applies an action.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Select(pos) => self.select(pos),
            Action::SelectCursor => self.select(self.cursor),
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::PlayAgain => {
                if self.can_play_again() {
                    self.play_again();
                }
            }
            Action::DismissModal => self.dismiss_modal(),
            Action::Exit => {
                info!("Exit requested");
                self.should_quit = true;
            }
        }
    }

    fn select(&mut self, pos: Position) {
        // The summary blocks the board until it is closed.
        if self.modal.is_some() {
            return;
        }
        self.cursor = pos;
        let mover = self.game.current_player();
        match self.game.apply_at(pos) {
            MoveOutcome::Rejected(rejection) => {
                debug!(%rejection, "Ignoring selection");
            }
            MoveOutcome::InProgress => {
                self.sounds.play(mover);
                self.status_message = turn_text(self.game.current_player());
            }
            MoveOutcome::Won(winner) => {
                self.sounds.play(mover);
                self.end_game(format!("{} wins!", winner.label()));
            }
            MoveOutcome::Tied => {
                self.sounds.play(mover);
                self.end_game("It's a tie!".to_string());
            }
        }
    }

    fn end_game(&mut self, message: String) {
        info!(%message, "Game over");
        self.status_message = message.clone();
        self.modal = Some(message);
        self.celebration.start_twirl();
    }

    fn dismiss_modal(&mut self) {
        if self.modal.take().is_some() {
            self.celebration.start_overlay();
        }
    }

    fn play_again(&mut self) {
        self.game.reset();
        self.modal = None;
        self.celebration.stop();
        self.cursor = Position::CENTER;
        self.status_message = turn_text(self.game.current_player());
    }
}

/// Status text announcing whose turn it is.
pub fn turn_text(player: Player) -> String {
    format!("{}'s turn", player.label())
}
