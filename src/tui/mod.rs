//! Terminal front end for the task board.
//!
//! One key press is decoded and fully handled, including any store round
//! trip, before the next one is read.

pub mod app;
pub mod keymap;
pub mod render;


use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mockable::Clock;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

pub use app::{App, DragState, Mode};
pub use keymap::{Action, KeyContext, map_key};

use crate::task::ports::TaskRepository;

/// Redraw interval while idle, so expired notices disappear.
const TICK: Duration = Duration::from_millis(250);

/// Takes over the terminal and runs the board until the user quits.
///
/// # Errors
///
/// Returns an I/O error when the terminal cannot be set up, drawn, or
/// restored.
pub async fn run<R, C>(app: &mut App<R, C>) -> io::Result<()>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    enable_raw_mode()?;
    let guard = TerminalGuard::new(restore_terminal);
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let outcome = run_app(&mut terminal, app).await;

    guard.restore()?;
    terminal.show_cursor()?;
    outcome
}

fn restore_terminal() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()
}

/// Undoes terminal setup when dropped, unless [`TerminalGuard::restore`]
/// already did.
struct TerminalGuard {
    undo: fn() -> io::Result<()>,
    armed: bool,
}

impl TerminalGuard {
    const fn new(undo: fn() -> io::Result<()>) -> Self {
        Self { undo, armed: true }
    }

    /// Restores the terminal and reports whether that worked.
    fn restore(mut self) -> io::Result<()> {
        self.armed = false;
        (self.undo)()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.armed
            && let Err(err) = (self.undo)()
        {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    }
}

/// Event loop over an already prepared terminal.
///
/// # Errors
///
/// Returns an I/O error when drawing or reading events fails.
pub async fn run_app<B, R, C>(terminal: &mut Terminal<B>, app: &mut App<R, C>) -> io::Result<()>
where
    B: Backend,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    app.start().await;
    while !app.should_quit() {
        terminal.draw(|frame| render::draw(frame, app))?;
        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = map_key(app.key_context(), key)
        {
            app.handle_action(action).await;
        }
    }
    Ok(())
}
