//! Dropdown construction

use crate::config::Config;
use crate::debounce::{DEFAULT_THROTTLE_MS, Debouncer};
use crate::error::{Error, Result};
use crate::loader::{ItemSource, Loader};
use crate::model::Item;
use crate::navigation::Navigator;
use crate::provider::ItemProvider;
use crate::select_filter::SelectFilter;
use crate::viewport::Viewport;

use super::{Dropdown, Settle, Shown};

/// Behavior switches for a dropdown
#[derive(Debug, Clone)]
pub struct DropdownOptions<T> {
    pub throttle_ms: u64,
    /// Shown before anything is selected. Without one, the first item is
    /// selected automatically.
    pub placeholder: Option<String>,
    /// Item to select on start, instead of the placeholder or first item
    pub initial: Option<T>,
    /// No-results text; `{term}` is replaced with the search term
    pub no_results: String,
    pub select_on_hover: bool,
    /// Skip the initial load; load when first opened
    pub load_only_when_needed: bool,
}

impl<T> Default for DropdownOptions<T> {
    fn default() -> Self {
        Self {
            throttle_ms: DEFAULT_THROTTLE_MS,
            placeholder: None,
            initial: None,
            no_results: "No results for '{term}'".to_string(),
            select_on_hover: true,
            load_only_when_needed: false,
        }
    }
}

pub struct DropdownBuilder<T> {
    provider: Option<Box<dyn ItemProvider<T, Settle>>>,
    options: DropdownOptions<T>,
    height: usize,
}

impl<T: Item + Clone + 'static> DropdownBuilder<T> {
    pub fn new() -> Self {
        Self {
            provider: None,
            options: DropdownOptions::default(),
            height: 10,
        }
    }

    /// Load items page by page from `source`
    pub fn loader(mut self, source: impl ItemSource<T> + 'static) -> Self {
        self.provider = Some(Box::new(Loader::new(source)));
        self
    }

    /// Filter a fixed list of options in memory
    pub fn options(self, options: Vec<T>) -> Self {
        self.select_filter(SelectFilter::new(options))
    }

    pub fn select_filter(mut self, filter: SelectFilter<T, Settle>) -> Self {
        self.provider = Some(Box::new(filter));
        self
    }

    /// Apply the settings from a user config
    pub fn config(mut self, config: &Config) -> Self {
        self.options.throttle_ms = config.throttle_ms;
        self.options.select_on_hover = config.select_on_hover;
        self.options.load_only_when_needed = config.load_only_when_needed;
        self.options.no_results = config.no_results.clone();
        if config.placeholder.is_some() {
            self.options.placeholder = config.placeholder.clone();
        }
        self
    }

    pub fn throttle_ms(mut self, ms: u64) -> Self {
        self.options.throttle_ms = ms;
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.options.placeholder = Some(text.into());
        self
    }

    pub fn initial(mut self, item: T) -> Self {
        self.options.initial = Some(item);
        self
    }

    pub fn no_results(mut self, template: impl Into<String>) -> Self {
        self.options.no_results = template.into();
        self
    }

    pub fn select_on_hover(mut self, enabled: bool) -> Self {
        self.options.select_on_hover = enabled;
        self
    }

    pub fn load_only_when_needed(mut self, enabled: bool) -> Self {
        self.options.load_only_when_needed = enabled;
        self
    }

    /// Number of visible list rows
    pub fn height(mut self, rows: usize) -> Self {
        self.height = rows;
        self
    }

    /// Build the dropdown and, unless deferred, start the initial load.
    ///
    /// # Errors
    ///
    /// Fails when no item provider was configured or the list has no room
    /// to show anything.
    pub fn build(self) -> Result<Dropdown<T>> {
        let provider = self
            .provider
            .ok_or(Error::Setup("no item provider configured"))?;
        if self.height == 0 {
            return Err(Error::Setup("list viewport has no height"));
        }

        let placeholder = self.options.placeholder.clone().unwrap_or_default();
        let mut dropdown = Dropdown {
            provider,
            navigator: Navigator::new(self.options.select_on_hover),
            viewport: Viewport::new(self.height),
            debouncer: Debouncer::new(self.options.throttle_ms),
            options: self.options,
            query: String::new(),
            selected: None,
            shown: Shown::Placeholder(placeholder),
            open: false,
            loading: false,
            loaded: false,
            initial_pending: false,
            no_results: None,
            events: Vec::new(),
        };

        if dropdown.options.load_only_when_needed {
            dropdown.initial_selection(true);
            dropdown.events.push(super::DropdownEvent::Ready);
        } else {
            dropdown.load(Settle::Initial);
        }
        Ok(dropdown)
    }
}

impl<T: Item + Clone + 'static> Default for DropdownBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
