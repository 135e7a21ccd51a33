//! Inputs to and notifications from the dropdown

/// A user intent, already decoded from raw key/pointer events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// A character typed into the search box
    Input(char),
    Backspace,
    /// Empty the search box
    ClearInput,
    /// Run the filter now instead of waiting for the quiet period
    Filter,
    Advance,
    Retreat,
    /// Select the current entry
    Commit,
    Open,
    Close,
    Toggle,
    /// Pointer over the entry at this index
    Hover(usize),
    /// Pointer click on the entry at this index
    Click(usize),
    /// Scroll the list by this many rows
    Scroll(isize),
    /// The list area now has this many rows
    Resize(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEvent<T> {
    /// The initial load settled and the initial selection was applied
    Ready,
    /// The user (or the initial selection) picked an item
    Changed(T),
    /// The highlighted entry moved
    CurrentChanged(Option<usize>),
    /// A search settled with nothing to show
    NoResults(String),
    LoadingStarted,
    LoadingEnded,
    Opened,
    Closed,
    /// A `refresh` call settled
    Refreshed,
}
