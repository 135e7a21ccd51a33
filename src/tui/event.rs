//! Terminal input, decoded into dropdown intents

use std::fmt::Debug;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::app::App;
use crate::model::Item;
use crate::widget::Intent;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);
const WHEEL_ROWS: isize = 3;

/// Wait for one input event, no longer than until the next debounced search
pub fn handle_events<T: Item + Clone + Debug + 'static>(app: &mut App<T>) -> Result<()> {
    let now = Instant::now();
    let timeout = app
        .dropdown
        .next_deadline()
        .map_or(POLL_TIMEOUT, |due| due.saturating_duration_since(now))
        .min(POLL_TIMEOUT);

    if event::poll(timeout)? {
        let now = Instant::now();
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                handle_key_event(app, key, now)
            }
            Event::Mouse(mouse) => handle_mouse_event(app, mouse, now),
            // The next draw re-measures the list
            Event::Resize(_, _) => {}
            _ => {}
        }
    }
    Ok(())
}

pub fn handle_key_event<T: Item + Clone + Debug + 'static>(
    app: &mut App<T>,
    key: KeyEvent,
    now: Instant,
) {
    let open = app.dropdown.is_open();
    let page = app.dropdown.viewport().height as isize;

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.cancel(),
            KeyCode::Char('u') => app.apply(Intent::ClearInput, now),
            KeyCode::Char('r') => app.dropdown.refresh(),
            KeyCode::Char('t') => app.cycle_theme(),
            KeyCode::Char('n') => app.apply(Intent::Advance, now),
            KeyCode::Char('p') => app.apply(Intent::Retreat, now),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc if open => app.apply(Intent::Close, now),
        KeyCode::Esc => app.cancel(),
        KeyCode::Enter if open => app.apply(Intent::Commit, now),
        KeyCode::Enter => app.finish(),
        KeyCode::Tab => app.apply(Intent::Toggle, now),
        KeyCode::Down => app.apply(Intent::Advance, now),
        KeyCode::Up => app.apply(Intent::Retreat, now),
        KeyCode::PageDown => app.apply(Intent::Scroll(page), now),
        KeyCode::PageUp => app.apply(Intent::Scroll(-page), now),
        KeyCode::Backspace => app.apply(Intent::Backspace, now),
        KeyCode::Char(c) => {
            if !open {
                app.apply(Intent::Open, now);
            }
            app.apply(Intent::Input(c), now);
        }
        _ => {}
    }
}

fn handle_mouse_event<T: Item + Clone + Debug + 'static>(
    app: &mut App<T>,
    mouse: MouseEvent,
    now: Instant,
) {
    if !app.dropdown.is_open() {
        return;
    }
    match mouse.kind {
        MouseEventKind::ScrollDown => app.apply(Intent::Scroll(WHEEL_ROWS), now),
        MouseEventKind::ScrollUp => app.apply(Intent::Scroll(-WHEEL_ROWS), now),
        MouseEventKind::Moved => {
            if let Some(row) = app.list_row(mouse.column, mouse.row) {
                app.apply(Intent::Hover(row), now);
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(row) = app.list_row(mouse.column, mouse.row) {
                app.apply(Intent::Click(row), now);
            }
        }
        _ => {}
    }
}
