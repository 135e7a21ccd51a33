//! Terminal front end for a dropdown
//!
//! Draws the dropdown on stderr so that whatever is printed on stdout (the
//! picked value) can be captured by a shell.

mod app;
mod event;
pub mod theme;
mod ui;

use std::fmt::Debug;
use std::io::{self, Stderr};
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::Item;
use crate::widget::Dropdown;
pub use app::App;
pub use theme::{Theme, ThemeVariant};

type Term = Terminal<CrosstermBackend<Stderr>>;

/// Run the picker until the user picks an item or cancels.
///
/// Returns the picked item, or `None` when cancelled.
pub fn run<T: Item + Clone + Debug + 'static>(
    dropdown: Dropdown<T>,
    theme: ThemeVariant,
) -> Result<Option<T>> {
    let mut terminal = setup()?;
    let mut app = App::new(dropdown, theme);
    let result = run_loop(&mut terminal, &mut app);
    restore(&mut terminal)?;
    result?;
    Ok(app.picked.take())
}

fn run_loop<T: Item + Clone + Debug + 'static>(terminal: &mut Term, app: &mut App<T>) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;
        app.sync_height(Instant::now());
        event::handle_events(app)?;
        app.tick(Instant::now());
    }
    Ok(())
}

fn setup() -> Result<Term> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    undo_on_err(
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture),
        || {
            let _ = disable_raw_mode();
        },
    )?;
    let terminal = undo_on_err(Terminal::new(CrosstermBackend::new(stderr)), || {
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = disable_raw_mode();
    })?;
    Ok(terminal)
}

/// Pass `result` through, running `undo` first if it is an error
fn undo_on_err<T, E>(result: std::result::Result<T, E>, undo: impl FnOnce()) -> std::result::Result<T, E> {
    if result.is_err() {
        undo();
    }
    result
}

fn restore(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
