//! Data source contract for the paginated loader
//!
//! A source is asked for one page at a time and answers through a one-shot
//! [`Reply`]. The reply may be sent inline, or later from another thread; it
//! carries the generation it was issued under so the loader can drop answers
//! to superseded queries.

use std::sync::mpsc::Sender;

/// One page request for a search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub term: String,
    /// Zero-based page index
    pub page: usize,
}

/// A page of results travelling back to the loader
#[derive(Debug)]
pub(crate) struct Delivery<T> {
    pub generation: u64,
    pub page: usize,
    pub items: Vec<T>,
}

/// Handle used by a source to answer exactly one [`PageRequest`].
///
/// `deliver` consumes the handle, so a request can be answered at most once.
/// Dropping it without delivering leaves the session loading forever: the
/// loader has no timeout, and a source must always answer.
#[derive(Debug)]
#[must_use = "a source must deliver every page it is asked for"]
pub struct Reply<T> {
    generation: u64,
    page: usize,
    sender: Sender<Delivery<T>>,
}

impl<T> Reply<T> {
    pub(crate) fn new(generation: u64, page: usize, sender: Sender<Delivery<T>>) -> Self {
        Self {
            generation,
            page,
            sender,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Answer the request. An empty page tells the loader the source is
    /// exhausted for this term.
    pub fn deliver(self, items: Vec<T>) {
        // The receiver only goes away with the loader itself
        let _ = self.sender.send(Delivery {
            generation: self.generation,
            page: self.page,
            items,
        });
    }

    /// Answer with an empty page
    pub fn exhausted(self) {
        self.deliver(Vec::new());
    }
}

/// A paged data source
pub trait ItemSource<T> {
    /// Fetch `request.page` of the results for `request.term` and answer
    /// through `reply`, now or later.
    fn fetch(&mut self, request: &PageRequest, reply: Reply<T>);
}

impl<T, F> ItemSource<T> for F
where
    F: FnMut(&PageRequest, Reply<T>),
{
    fn fetch(&mut self, request: &PageRequest, reply: Reply<T>) {
        self(request, reply)
    }
}
