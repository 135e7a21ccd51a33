//! UI rendering for the picker

mod helpers;

use std::fmt::Debug;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
};

use super::app::App;
use super::theme::Theme;
use crate::model::Item;
use helpers::highlight_term;

/// Main render function
pub fn render<T: Item + Clone + Debug + 'static>(frame: &mut Frame, app: &mut App<T>) {
    let theme = app.theme_variant.theme();
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Min(0),    // List
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_input(frame, app, &theme, chunks[0]);
    if app.dropdown.is_open() {
        render_list(frame, app, &theme, chunks[1]);
    } else {
        app.list_area = None;
        render_closed(frame, &theme, chunks[1]);
    }
    render_footer(frame, app, &theme, chunks[2]);
}

fn render_input<T: Item + Clone + Debug + 'static>(
    frame: &mut Frame,
    app: &App<T>,
    theme: &Theme,
    area: Rect,
) {
    let dropdown = &app.dropdown;
    let border = if dropdown.is_open() {
        theme.blue
    } else {
        theme.surface1
    };

    // Closed: what is selected. Open: the search box.
    let line = if dropdown.is_open() {
        Line::from(vec![
            Span::styled("❯ ", Style::default().fg(theme.blue)),
            Span::styled(dropdown.query().to_string(), Style::default().fg(theme.text)),
            Span::styled("█", Style::default().fg(theme.subtext0)),
        ])
    } else {
        let shown = dropdown.shown();
        let color = if shown.is_placeholder() {
            theme.subtext0
        } else {
            theme.text
        };
        Line::from(vec![
            Span::styled(shown.text().to_string(), Style::default().fg(color)),
            Span::styled(" ▾", Style::default().fg(theme.subtext0)),
        ])
    };

    let mut title = vec![Span::styled(" droplist ", Style::default().fg(theme.text))];
    if dropdown.is_loading() {
        title.push(Span::styled(
            format!("{} loading ", app.spinner()),
            Style::default().fg(theme.mauve),
        ));
    }

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Line::from(title)),
    );
    frame.render_widget(paragraph, area);
}

fn render_list<T: Item + Clone + Debug + 'static>(
    frame: &mut Frame,
    app: &mut App<T>,
    theme: &Theme,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.surface1));
    let inner = block.inner(area);
    app.list_area = Some(inner);

    let dropdown = &app.dropdown;
    if let Some(text) = dropdown.no_results() {
        let paragraph = Paragraph::new(Span::styled(text.to_string(), Style::default().fg(theme.red)))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    // Only the window the viewport covers; the dropdown owns scrolling
    let entries = dropdown.entries();
    let offset = dropdown.viewport().offset.min(entries.len());
    let end = (offset + inner.height as usize).min(entries.len());
    let items: Vec<ListItem> = entries[offset..end]
        .iter()
        .map(|entry| {
            let label = entry.item.label();
            let line = if entry.is_disabled() {
                Line::from(Span::styled(
                    label,
                    Style::default()
                        .fg(theme.subtext0)
                        .add_modifier(Modifier::DIM),
                ))
            } else {
                Line::from(highlight_term(&label, &entry.term, theme.text, theme.yellow))
            };
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("▌")
        .highlight_style(
            Style::default()
                .bg(theme.surface0)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(
        dropdown
            .current()
            .filter(|&i| i >= offset && i < end)
            .map(|i| i - offset),
    );
    frame.render_stateful_widget(list, area, &mut state);

    if entries.len() > inner.height as usize {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█");
        let mut scrollbar_state = ScrollbarState::new(entries.len()).position(offset);
        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

fn render_closed(frame: &mut Frame, theme: &Theme, area: Rect) {
    let hint = Paragraph::new(Span::styled(
        "Type to search, Tab or ↓ to open",
        Style::default().fg(theme.subtext0),
    ));
    frame.render_widget(hint, area);
}

fn render_footer<T: Item + Clone + Debug + 'static>(
    frame: &mut Frame,
    app: &App<T>,
    theme: &Theme,
    area: Rect,
) {
    let key = Style::default().fg(theme.blue);
    let text = Style::default().fg(theme.subtext0);
    let mut spans = vec![
        Span::styled("↑↓", key),
        Span::styled(" move  ", text),
        Span::styled("enter", key),
        Span::styled(" pick  ", text),
        Span::styled("esc", key),
        Span::styled(" close  ", text),
        Span::styled("^t", key),
        Span::styled(" theme", text),
    ];
    if app.dropdown.is_open() {
        spans.push(Span::styled(
            format!("  {} items", app.dropdown.entries().len()),
            text,
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
