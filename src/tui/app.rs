//! Picker state wrapped around a dropdown

use std::fmt::Debug;
use std::time::Instant;

use ratatui::layout::Rect;

use super::theme::ThemeVariant;
use crate::model::Item;
use crate::widget::{Dropdown, DropdownEvent, Intent};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

pub struct App<T> {
    pub dropdown: Dropdown<T>,
    pub theme_variant: ThemeVariant,
    /// Inner area of the list as last rendered, for mouse hit testing
    pub list_area: Option<Rect>,
    pub should_quit: bool,
    /// The item the user confirmed
    pub picked: Option<T>,
    /// Initial selection applied; later `Changed` events come from the user
    ready: bool,
    spinner: usize,
}

impl<T: Item + Clone + Debug + 'static> App<T> {
    pub fn new(dropdown: Dropdown<T>, theme_variant: ThemeVariant) -> Self {
        let mut app = Self {
            dropdown,
            theme_variant,
            list_area: None,
            should_quit: false,
            picked: None,
            ready: false,
            spinner: 0,
        };
        app.process_events();
        app
    }

    pub fn apply(&mut self, intent: Intent, now: Instant) {
        self.dropdown.handle(intent, now);
        self.process_events();
    }

    /// Run due work and apply results that came in from the source
    pub fn tick(&mut self, now: Instant) {
        self.dropdown.tick(now);
        if self.dropdown.is_loading() {
            self.spinner = (self.spinner + 1) % SPINNER.len();
        }
        self.process_events();
    }

    /// Keep the dropdown's viewport in step with the rendered list height
    pub fn sync_height(&mut self, now: Instant) {
        let Some(area) = self.list_area else {
            return;
        };
        let rows = area.height as usize;
        if rows > 0 && rows != self.dropdown.viewport().height {
            self.apply(Intent::Resize(rows), now);
        }
    }

    /// Entry index under the terminal cell at `(x, y)`
    pub fn list_row(&self, x: u16, y: u16) -> Option<usize> {
        let area = self.list_area?;
        if x < area.x || x >= area.x + area.width || y < area.y || y >= area.y + area.height {
            return None;
        }
        let index = (y - area.y) as usize + self.dropdown.viewport().offset;
        (index < self.dropdown.entries().len()).then_some(index)
    }

    /// Accept the current selection and quit
    pub fn finish(&mut self) {
        self.picked = self.dropdown.selected().cloned();
        self.should_quit = true;
    }

    /// Quit without picking
    pub fn cancel(&mut self) {
        self.picked = None;
        self.should_quit = true;
    }

    pub fn cycle_theme(&mut self) {
        self.theme_variant = self.theme_variant.next();
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER[self.spinner]
    }

    fn process_events(&mut self) {
        for event in self.dropdown.drain_events() {
            tracing::trace!(target: "droplist::tui", ?event, "dropdown event");
            match event {
                DropdownEvent::Ready => self.ready = true,
                DropdownEvent::Changed(item) if self.ready => {
                    self.picked = Some(item);
                    self.should_quit = true;
                }
                _ => {}
            }
        }
    }
}
