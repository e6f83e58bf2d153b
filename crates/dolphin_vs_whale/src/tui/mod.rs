//! Terminal presentation of the game.

mod animation;
mod app;
mod input;
mod layout;
mod ui;

pub use animation::{Celebration, SPIN_FRAMES, SPIN_PERIOD, TWIRL_PERIOD};
pub use app::{App, turn_text};
pub use input::{Action, Direction, key_action, move_cursor};
pub use layout::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout, Target, center_rect};
pub use ui::draw;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};

use crate::config::AppConfig;

/// Runs the game until the user exits.
#[instrument(skip(config))]
pub fn run(config: &AppConfig) -> Result<()> {
    info!("Starting Dolphin vs Whale");

    let app = App::from_config(config);
    let tick_rate = Duration::from_millis((*config.tick_rate_ms()).max(1));

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, app, tick_rate);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Goodbye");
    res
}

/// Holds the terminal in raw mode with the alternate screen and mouse
/// capture; dropping it restores the terminal, also while unwinding.
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self {
            restore: restore_terminal,
        };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )
}

/// Event loop: draw, wait for input until the next tick, advance animations.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();
    loop {
        let mut drawn = None;
        terminal.draw(|f| drawn = Some(ui::draw(f, &app)))?;
        if let Some(layout) = drawn {
            app.set_layout(layout);
        }

        if app.should_quit() {
            return Ok(());
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            app.handle_event(event::read()?);
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_rate {
            app.on_tick(elapsed);
            last_tick = Instant::now();
        }
    }
}
