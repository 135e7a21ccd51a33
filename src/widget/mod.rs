//! The dropdown handle
//!
//! `Dropdown` ties the pieces together: intents come in, the debouncer
//! decides when a search runs, the item provider fills the list, and the
//! navigator keeps a current entry highlighted. The terminal front end (or
//! any other host) only renders what the handle exposes and forwards intents.

mod builder;
mod intent;

use std::time::Instant;

use crate::debounce::Debouncer;
use crate::model::{Entry, Item};
use crate::navigation::Navigator;
use crate::provider::{ItemProvider, ProviderEvent};
use crate::viewport::Viewport;

pub use builder::{DropdownBuilder, DropdownOptions};
pub use intent::{DropdownEvent, Intent};

/// Work a dropdown has queued for when its provider settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settle {
    /// First load: apply the initial selection and announce readiness
    Initial,
    /// After `reset`: re-apply the initial selection, ignoring the
    /// configured initial item
    Reset,
    /// After a search: show no-results or re-seed the current entry
    CheckResults { term: String },
    /// After `refresh`
    Refresh,
}

/// What the closed dropdown displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Placeholder(String),
    Item(String),
}

impl Shown {
    pub fn text(&self) -> &str {
        match self {
            Self::Placeholder(text) | Self::Item(text) => text,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

pub struct Dropdown<T> {
    provider: Box<dyn ItemProvider<T, Settle>>,
    navigator: Navigator,
    viewport: Viewport,
    debouncer: Debouncer,
    options: DropdownOptions<T>,
    query: String,
    selected: Option<T>,
    shown: Shown,
    open: bool,
    loading: bool,
    /// A load has been started at least once
    loaded: bool,
    /// The initial load has not settled yet
    initial_pending: bool,
    no_results: Option<String>,
    events: Vec<DropdownEvent<T>>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Dropdown<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dropdown")
            .field("query", &self.query)
            .field("selected", &self.selected)
            .field("open", &self.open)
            .field("loading", &self.loading)
            .field("entries", &self.provider.entries().len())
            .field("current", &self.navigator.current())
            .finish()
    }
}

impl<T: Item + Clone + 'static> Dropdown<T> {
    pub fn builder() -> DropdownBuilder<T> {
        DropdownBuilder::new()
    }

    // ==================== Intents ====================

    /// Apply one user intent
    pub fn handle(&mut self, intent: Intent, now: Instant) {
        match intent {
            Intent::Input(c) => {
                self.query.push(c);
                self.request_filter(now);
            }
            Intent::Backspace => {
                if self.query.pop().is_some() {
                    self.request_filter(now);
                }
            }
            Intent::ClearInput => {
                if !self.query.is_empty() {
                    self.query.clear();
                    self.request_filter(now);
                }
            }
            Intent::Filter => {
                self.debouncer.cancel();
                self.filter();
            }
            // A closed dropdown opens first, highlighting the selection
            Intent::Advance if !self.open => self.open(),
            Intent::Advance => self.advance(),
            Intent::Retreat => self.retreat(),
            Intent::Commit => self.commit(),
            Intent::Open => self.open(),
            Intent::Close => self.close(),
            Intent::Toggle => self.toggle(),
            Intent::Hover(index) => {
                if self.navigator.hover(self.provider.entries(), index) {
                    self.current_changed();
                }
            }
            Intent::Click(index) => self.click(index),
            Intent::Scroll(delta) => {
                let len = self.provider.entries().len();
                if self.viewport.scroll_by(delta, len) {
                    self.check_more();
                }
            }
            Intent::Resize(height) => {
                if height > 0 && height != self.viewport.height {
                    self.viewport.resize(height);
                    self.check_more();
                }
            }
        }
    }

    /// Advance time: run a due search and apply results that arrived from
    /// the provider. Call on every event-loop iteration.
    pub fn tick(&mut self, now: Instant) {
        if self.debouncer.poll(now) {
            self.filter();
        }
        if self.provider.pump(&self.viewport) > 0 {
            self.process_events();
        }
    }

    /// When the next debounced search is due, if one is pending
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    fn request_filter(&mut self, now: Instant) {
        if self.debouncer.trigger(now) {
            self.filter();
        }
    }

    // ==================== Commands ====================

    /// Search for `term` right away, replacing the search box text
    pub fn new_term(&mut self, term: &str) {
        self.query = term.to_string();
        self.debouncer.cancel();
        self.filter();
    }

    /// Top up the list if the viewport has room
    pub fn check_more(&mut self) {
        self.provider.check_more(&self.viewport);
        self.process_events();
    }

    pub fn advance(&mut self) {
        if self
            .navigator
            .advance(self.provider.entries(), &mut self.viewport)
        {
            self.current_changed();
            self.check_more();
        }
    }

    pub fn retreat(&mut self) {
        if self
            .navigator
            .retreat(self.provider.entries(), &mut self.viewport)
        {
            self.current_changed();
        }
    }

    /// Make the entry at `index` current (pointer)
    pub fn set_current(&mut self, index: usize) {
        if self.navigator.set_current(self.provider.entries(), index) {
            self.current_changed();
        }
    }

    /// Seed the current entry from the selection if there is none
    pub fn ensure_current(&mut self) {
        let before = self.navigator.current();
        self.navigator
            .ensure_current(self.provider.entries(), self.selected.as_ref());
        if self.navigator.current() != before {
            self.current_changed();
        }
    }

    /// Select the current entry
    pub fn commit(&mut self) {
        let item = self
            .navigator
            .current_entry(self.provider.entries())
            .filter(|e| !e.is_disabled())
            .map(|e| e.item.clone());
        if let Some(item) = item {
            self.select_item(item, true);
        }
    }

    fn click(&mut self, index: usize) {
        let item = match self.provider.entries().get(index) {
            Some(entry) if !entry.is_disabled() => entry.item.clone(),
            _ => return,
        };
        self.set_current(index);
        self.select_item(item, true);
    }

    /// Make `item` the selection and close. Raises `Changed` when `notify`.
    pub fn select_item(&mut self, item: T, notify: bool) {
        self.shown = Shown::Item(item.label());
        self.close();
        tracing::debug!(target: "droplist::widget", value = ?item.value(), "item selected");
        self.selected = Some(item.clone());
        if notify {
            self.events.push(DropdownEvent::Changed(item));
        }
    }

    /// Replace the selection and any rendered entries that are the same
    /// item as `item` according to `identity`
    pub fn refresh_item<K, F>(&mut self, item: T, identity: F)
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        let key = identity(&item);
        if self.selected.as_ref().is_some_and(|sel| identity(sel) == key) {
            self.shown = Shown::Item(item.label());
            self.selected = Some(item.clone());
        }
        for entry in self.provider.entries_mut() {
            if identity(&entry.item) == key {
                entry.item = item.clone();
            }
        }
        // The current entry may have become disabled
        self.ensure_current();
    }

    /// Clear the search and the selection, then reload from scratch
    pub fn reset(&mut self) {
        self.query.clear();
        self.debouncer.cancel();
        self.selected = None;
        self.shown = Shown::Placeholder(String::new());
        self.load(Settle::Reset);
    }

    /// Reload the current search. Raises `Refreshed` once settled.
    pub fn refresh(&mut self) {
        self.load(Settle::Refresh);
    }

    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.events.push(DropdownEvent::Opened);
        if self.loaded {
            self.check_more();
        } else {
            self.filter();
        }
        self.ensure_current();
    }

    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.events.push(DropdownEvent::Closed);
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    // ==================== Internals ====================

    fn filter(&mut self) {
        let term = self.query.clone();
        self.load(Settle::CheckResults { term });
    }

    fn load(&mut self, settle: Settle) {
        if self.initial_pending && settle != Settle::Initial {
            // Superseded: its completion will never arrive
            self.initial_pending = false;
            tracing::debug!(target: "droplist::widget", "initial load superseded");
            self.events.push(DropdownEvent::Ready);
        }
        if settle == Settle::Initial {
            self.initial_pending = true;
        }
        self.loaded = true;
        let term = self.query.clone();
        self.provider.load(&term, Some(settle), &self.viewport);
        self.process_events();
    }

    fn current_changed(&mut self) {
        self.events
            .push(DropdownEvent::CurrentChanged(self.navigator.current()));
    }

    fn process_events(&mut self) {
        for event in self.provider.drain_events() {
            match event {
                ProviderEvent::LoadingStarted => {
                    self.loading = true;
                    self.events.push(DropdownEvent::LoadingStarted);
                }
                ProviderEvent::LoadingEnded => {
                    self.loading = false;
                    self.events.push(DropdownEvent::LoadingEnded);
                }
                ProviderEvent::Cleared => {
                    self.navigator.clear();
                    self.viewport.reset();
                }
                ProviderEvent::BatchAppended { .. } => {
                    if self.open {
                        self.ensure_current();
                    }
                }
                ProviderEvent::ExhaustedEmpty { .. } => {}
                ProviderEvent::Settled(settle) => self.settled(settle),
            }
        }
    }

    fn settled(&mut self, settle: Settle) {
        match settle {
            Settle::Initial => {
                self.initial_pending = false;
                self.initial_selection(true);
                self.check_current_results();
                self.events.push(DropdownEvent::Ready);
            }
            Settle::Reset => {
                self.initial_selection(false);
                self.check_current_results();
            }
            Settle::CheckResults { term } => self.check_results(&term),
            Settle::Refresh => self.events.push(DropdownEvent::Refreshed),
        }
    }

    fn check_results(&mut self, term: &str) {
        if self.provider.entries().is_empty() {
            let text = self.no_results_text(term);
            self.no_results = Some(text.clone());
            self.events.push(DropdownEvent::NoResults(text));
        } else {
            self.no_results = None;
            self.ensure_current();
        }
    }

    pub(crate) fn initial_selection(&mut self, use_initial: bool) {
        let preselected = self
            .provider
            .preselected()
            .and_then(|i| self.provider.entries().get(i))
            .map(|e| e.item.clone());
        let initial = self.options.initial.clone().filter(|_| use_initial);

        if let Some(item) = initial.or(preselected) {
            self.select_item(item, true);
        } else if let Some(placeholder) = &self.options.placeholder {
            self.shown = Shown::Placeholder(placeholder.clone());
        } else {
            let first = self
                .provider
                .entries()
                .iter()
                .find(|e| !e.is_disabled())
                .map(|e| e.item.clone());
            match first {
                Some(item) => self.select_item(item, true),
                None => self.shown = Shown::Placeholder(self.no_results_text("")),
            }
        }
    }

    fn check_current_results(&mut self) {
        let term = self.provider.term().to_string();
        self.check_results(&term);
    }

    fn no_results_text(&self, term: &str) -> String {
        self.options.no_results.replace("{term}", term)
    }

    // ==================== Accessors ====================

    pub fn entries(&self) -> &[Entry<T>] {
        self.provider.entries()
    }

    pub fn current(&self) -> Option<usize> {
        self.navigator.current()
    }

    pub fn current_item(&self) -> Option<&T> {
        self.navigator
            .current_entry(self.provider.entries())
            .map(|e| &e.item)
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn shown(&self) -> &Shown {
        &self.shown
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The list is waiting on its provider
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn no_results(&self) -> Option<&str> {
        self.no_results.as_deref()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<DropdownEvent<T>> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests;
