//! Common contract for anything that fills the dropdown list
//!
//! Both the paginated [`Loader`](crate::loader::Loader) and the in-memory
//! [`SelectFilter`](crate::select_filter::SelectFilter) implement
//! `ItemProvider`, so the widget can drive either one the same way.

use crate::model::Entry;
use crate::viewport::Viewport;

/// Notifications raised by a provider for the widget to consume
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEvent<C> {
    /// The list entered its loading state
    LoadingStarted,
    /// The list left its loading state
    LoadingEnded,
    /// Previously rendered entries were dropped before a fresh first page
    Cleared,
    /// `count` entries were appended from page `page`
    BatchAppended { count: usize, page: usize },
    /// The source ran dry without producing a single entry for `term`
    ExhaustedEmpty { term: String },
    /// The session filled the viewport or ran out of items
    Settled(C),
}

pub trait ItemProvider<T, C> {
    /// Start a fresh session for `term`. `on_settled` comes back as
    /// [`ProviderEvent::Settled`] once the session settles.
    fn load(&mut self, term: &str, on_settled: Option<C>, viewport: &Viewport);

    /// Fetch more if the viewport still has room
    fn check_more(&mut self, viewport: &Viewport);

    /// Apply results that arrived since the last call.
    /// Returns the number of results applied.
    fn pump(&mut self, _viewport: &Viewport) -> usize {
        0
    }

    /// Rendered entries in display order
    fn entries(&self) -> &[Entry<T>];

    /// Rendered entries, for in-place refresh
    fn entries_mut(&mut self) -> &mut [Entry<T>];

    /// Take all pending events, oldest first
    fn drain_events(&mut self) -> Vec<ProviderEvent<C>>;

    fn is_loading(&self) -> bool {
        false
    }

    /// Index of the entry that should start out selected, if the provider
    /// knows one (static option lists)
    fn preselected(&self) -> Option<usize> {
        None
    }

    /// The term of the most recent session
    fn term(&self) -> &str;
}
