//! Paged source over an in-memory list
//!
//! Serves the items whose label has a word starting with the term, one page
//! at a time. An optional latency answers from a worker thread instead of
//! inline, which makes the loader behave as it would against a remote API.

use std::sync::Arc;
use std::time::Duration;

use regex::Regex;

use crate::loader::{ItemSource, PageRequest, Reply};
use crate::model::Item;
use crate::select_filter::word_prefix_matcher;

pub struct StaticSource<T> {
    items: Arc<Vec<T>>,
    page_size: usize,
    latency: Duration,
}

impl<T: Item + Clone> StaticSource<T> {
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items: Arc::new(items),
            page_size: page_size.max(1),
            latency: Duration::ZERO,
        }
    }

    /// Answer every request after `latency`, from a worker thread
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Items on `page` of the results for `term`
    pub fn page(&self, term: &str, page: usize) -> Vec<T> {
        page_of(&self.items, term, page, self.page_size)
    }
}

fn page_of<T: Item + Clone>(items: &[T], term: &str, page: usize, page_size: usize) -> Vec<T> {
    let pattern: Option<Regex> = if term.is_empty() {
        None
    } else {
        match word_prefix_matcher(term) {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::warn!(target: "droplist::sources", term, "invalid pattern: {e}");
                return Vec::new();
            }
        }
    };
    items
        .iter()
        .filter(|item| pattern.as_ref().is_none_or(|p| p.is_match(&item.label())))
        .skip(page * page_size)
        .take(page_size)
        .cloned()
        .collect()
}

impl<T> ItemSource<T> for StaticSource<T>
where
    T: Item + Clone + Send + Sync + 'static,
{
    fn fetch(&mut self, request: &PageRequest, reply: Reply<T>) {
        if self.latency.is_zero() {
            reply.deliver(self.page(&request.term, request.page));
            return;
        }
        let items = Arc::clone(&self.items);
        let latency = self.latency;
        let page_size = self.page_size;
        let request = request.clone();
        std::thread::spawn(move || {
            std::thread::sleep(latency);
            reply.deliver(page_of(&items, &request.term, request.page, page_size));
        });
    }
}
