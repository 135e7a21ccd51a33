//! Scroll-continuation decision
//!
//! Decides from the viewport whether another page should be requested. The
//! loader consults this after every appended page and whenever the list is
//! scrolled or opened, which keeps fetching until the last entry falls below
//! the visible window or the source runs dry.

use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// The session is exhausted; nothing more will ever be fetched
    Exhausted,
    /// The viewport still has room
    Fetch,
    /// The last entry is below the visible window
    Filled,
}

impl Continuation {
    pub fn wants_fetch(self) -> bool {
        self == Self::Fetch
    }
}

/// Assess a list of `len` rendered entries against `viewport`
pub fn assess(exhausted: bool, len: usize, viewport: &Viewport) -> Continuation {
    if exhausted {
        return Continuation::Exhausted;
    }
    let Some(last) = len.checked_sub(1) else {
        return Continuation::Fetch;
    };
    if viewport.relative_top(last) < viewport.height as isize {
        Continuation::Fetch
    } else {
        Continuation::Filled
    }
}
