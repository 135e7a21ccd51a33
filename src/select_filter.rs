//! Synchronous filtering over a fixed option list
//!
//! Used when every option is known up front. Each load replaces the rendered
//! entries with the options whose label has a word starting with the term
//! (case-insensitive). There is nothing to paginate, so `check_more` does
//! nothing.

use regex::{Regex, RegexBuilder};

use crate::model::{Choice, Entry, Item};
use crate::provider::{ItemProvider, ProviderEvent};
use crate::viewport::Viewport;

/// Builds the pattern a label must match for a given term
pub type Matcher = fn(&str) -> Result<Regex, regex::Error>;

/// Default matcher: the term at the start of the label or after whitespace
pub fn word_prefix_matcher(term: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"(^|\s){}", regex::escape(term)))
        .case_insensitive(true)
        .build()
}

#[derive(Debug)]
pub struct SelectFilter<T, C = ()> {
    options: Vec<T>,
    matcher: Matcher,
    preselected: Option<usize>,
    term: String,
    entries: Vec<Entry<T>>,
    events: Vec<ProviderEvent<C>>,
}

impl<T: Item + Clone, C> SelectFilter<T, C> {
    pub fn new(options: Vec<T>) -> Self {
        Self {
            options,
            matcher: word_prefix_matcher,
            preselected: None,
            term: String::new(),
            entries: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Replace the default word-prefix matcher
    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Mark the option at `index` as selected before any user input
    pub fn with_preselected(mut self, index: Option<usize>) -> Self {
        self.preselected = index.filter(|&i| i < self.options.len());
        self
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    fn filter(&mut self, term: &str) {
        self.entries.clear();
        if term.is_empty() {
            self.entries
                .extend(self.options.iter().map(|o| Entry::new(o.clone(), term)));
            return;
        }
        match (self.matcher)(term) {
            Ok(pattern) => self.entries.extend(
                self.options
                    .iter()
                    .filter(|o| pattern.is_match(&o.label()))
                    .map(|o| Entry::new(o.clone(), term)),
            ),
            Err(e) => {
                tracing::warn!(target: "droplist::select_filter", term, "invalid filter pattern: {e}");
            }
        }
    }
}

impl<C> SelectFilter<Choice, C> {
    /// Build from choices, honoring a choice flagged as `selected`
    pub fn from_choices(choices: Vec<Choice>) -> Self {
        let preselected = choices.iter().position(|c| c.selected);
        Self::new(choices).with_preselected(preselected)
    }
}

impl<T: Item + Clone, C> ItemProvider<T, C> for SelectFilter<T, C> {
    fn load(&mut self, term: &str, on_settled: Option<C>, _viewport: &Viewport) {
        self.term = term.to_string();
        self.filter(term);
        self.events.push(ProviderEvent::Cleared);
        if self.entries.is_empty() {
            self.events.push(ProviderEvent::ExhaustedEmpty {
                term: term.to_string(),
            });
        } else {
            self.events.push(ProviderEvent::BatchAppended {
                count: self.entries.len(),
                page: 0,
            });
        }
        if let Some(token) = on_settled {
            self.events.push(ProviderEvent::Settled(token));
        }
    }

    fn check_more(&mut self, _viewport: &Viewport) {}

    fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    fn entries_mut(&mut self) -> &mut [Entry<T>] {
        &mut self.entries
    }

    fn drain_events(&mut self) -> Vec<ProviderEvent<C>> {
        std::mem::take(&mut self.events)
    }

    fn preselected(&self) -> Option<usize> {
        self.preselected
    }

    fn term(&self) -> &str {
        &self.term
    }
}
