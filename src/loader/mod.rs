//! Generation-tokened paginated loader
//!
//! Every call to [`Loader::load`] starts a new session with a fresh
//! generation number. Page requests capture that number in their [`Reply`],
//! and results are applied only if their generation still matches the active
//! session. Answers to superseded queries are dropped without a trace, which
//! keeps the list correct no matter in which order the source answers.
//!
//! Within a session pages are fetched strictly one after another: page n+1 is
//! only requested once page n has been applied.

pub mod continuation;
pub mod source;

use std::sync::mpsc::{self, Receiver, Sender};

use crate::model::Entry;
use crate::provider::{ItemProvider, ProviderEvent};
use crate::viewport::Viewport;

use self::continuation::Continuation;
use self::source::Delivery;
pub use self::source::{ItemSource, PageRequest, Reply};

/// One query session. Replaced wholesale on every new term.
#[derive(Debug)]
struct Session<C> {
    generation: u64,
    term: String,
    /// Next page to fetch
    page: usize,
    loading: bool,
    exhausted: bool,
    on_settled: Option<C>,
}

impl<C> Session<C> {
    fn new(generation: u64, term: &str, on_settled: Option<C>) -> Self {
        Self {
            generation,
            term: term.to_string(),
            page: 0,
            loading: false,
            exhausted: false,
            on_settled,
        }
    }
}

pub struct Loader<T, C = ()> {
    source: Box<dyn ItemSource<T>>,
    sender: Sender<Delivery<T>>,
    receiver: Receiver<Delivery<T>>,
    session: Session<C>,
    entries: Vec<Entry<T>>,
    events: Vec<ProviderEvent<C>>,
    /// The list shows its loading indicator
    busy: bool,
    fetches: usize,
}

impl<T, C> std::fmt::Debug for Loader<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader")
            .field("generation", &self.session.generation)
            .field("term", &self.session.term)
            .field("page", &self.session.page)
            .field("loading", &self.session.loading)
            .field("exhausted", &self.session.exhausted)
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl<T, C> Loader<T, C> {
    pub fn new(source: impl ItemSource<T> + 'static) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            source: Box::new(source),
            sender,
            receiver,
            session: Session::new(0, "", None),
            entries: Vec::new(),
            events: Vec::new(),
            busy: false,
            fetches: 0,
        }
    }

    /// Begin a brand-new session for `term` and request its first page.
    ///
    /// Any pending completion from the previous session is dropped, and any
    /// answer still in flight for it will be ignored.
    pub fn load(&mut self, term: &str, on_settled: Option<C>, viewport: &Viewport) {
        let generation = self.session.generation + 1;
        self.session = Session::new(generation, term, on_settled);
        tracing::debug!(target: "droplist::loader", generation, term, "new session");
        self.fetch_next();
        self.pump(viewport);
    }

    /// Request the next page if the viewport still has room.
    pub fn check_more(&mut self, viewport: &Viewport) {
        if !self.session.loading && !self.session.exhausted {
            self.needs_more(viewport);
        }
        self.pump(viewport);
    }

    /// Whether the viewport needs more entries. Requests the next page as a
    /// side effect when it does.
    pub fn needs_more(&mut self, viewport: &Viewport) -> bool {
        match continuation::assess(self.session.exhausted, self.entries.len(), viewport) {
            Continuation::Fetch => {
                self.fetch_next();
                true
            }
            Continuation::Exhausted | Continuation::Filled => false,
        }
    }

    /// Apply every answer that has arrived so far. Answers that trigger
    /// further fetches from synchronous sources are applied in the same call.
    pub fn pump(&mut self, viewport: &Viewport) -> usize {
        let mut applied = 0;
        while let Ok(delivery) = self.receiver.try_recv() {
            if self.apply(delivery, viewport) {
                applied += 1;
            }
        }
        applied
    }

    fn fetch_next(&mut self) {
        if self.session.loading || self.session.exhausted {
            return;
        }
        self.session.loading = true;
        if !self.busy {
            self.busy = true;
            self.events.push(ProviderEvent::LoadingStarted);
        }
        self.fetches += 1;

        let request = PageRequest {
            term: self.session.term.clone(),
            page: self.session.page,
        };
        let reply = Reply::new(self.session.generation, request.page, self.sender.clone());
        tracing::trace!(
            target: "droplist::loader",
            generation = self.session.generation,
            term = %request.term,
            page = request.page,
            "fetching page"
        );
        self.source.fetch(&request, reply);
    }

    fn apply(&mut self, delivery: Delivery<T>, viewport: &Viewport) -> bool {
        if delivery.generation != self.session.generation {
            return false;
        }
        if !self.session.loading {
            tracing::warn!(
                target: "droplist::loader",
                generation = delivery.generation,
                page = delivery.page,
                "ignoring page that was not requested"
            );
            return false;
        }

        if self.session.page == 0 && !self.entries.is_empty() {
            self.entries.clear();
            self.events.push(ProviderEvent::Cleared);
        }
        let page = self.session.page;
        self.session.page += 1;

        let count = delivery.items.len();
        if count == 0 {
            self.session.exhausted = true;
        }
        let term = &self.session.term;
        self.entries.extend(
            delivery
                .items
                .into_iter()
                .map(|item| Entry { item, term: term.clone() }),
        );
        if count > 0 {
            self.events.push(ProviderEvent::BatchAppended { count, page });
        }
        self.session.loading = false;
        tracing::debug!(
            target: "droplist::loader",
            generation = self.session.generation,
            page,
            count,
            exhausted = self.session.exhausted,
            "page applied"
        );

        if !self.needs_more(viewport) {
            self.settle();
        }
        true
    }

    fn settle(&mut self) {
        if std::mem::take(&mut self.busy) {
            self.events.push(ProviderEvent::LoadingEnded);
        }
        if self.entries.is_empty() {
            self.events.push(ProviderEvent::ExhaustedEmpty {
                term: self.session.term.clone(),
            });
        }
        if let Some(token) = self.session.on_settled.take() {
            self.events.push(ProviderEvent::Settled(token));
        }
    }

    pub fn generation(&self) -> u64 {
        self.session.generation
    }

    pub fn term(&self) -> &str {
        &self.session.term
    }

    /// Next page index to fetch
    pub fn page(&self) -> usize {
        self.session.page
    }

    pub fn is_loading(&self) -> bool {
        self.session.loading
    }

    pub fn is_exhausted(&self) -> bool {
        self.session.exhausted
    }

    /// Total pages requested over the loader's lifetime
    pub fn fetch_count(&self) -> usize {
        self.fetches
    }

    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    pub fn drain_events(&mut self) -> Vec<ProviderEvent<C>> {
        std::mem::take(&mut self.events)
    }
}

impl<T, C> ItemProvider<T, C> for Loader<T, C> {
    fn load(&mut self, term: &str, on_settled: Option<C>, viewport: &Viewport) {
        Loader::load(self, term, on_settled, viewport);
    }

    fn check_more(&mut self, viewport: &Viewport) {
        Loader::check_more(self, viewport);
    }

    fn pump(&mut self, viewport: &Viewport) -> usize {
        Loader::pump(self, viewport)
    }

    fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    fn entries_mut(&mut self) -> &mut [Entry<T>] {
        &mut self.entries
    }

    fn drain_events(&mut self) -> Vec<ProviderEvent<C>> {
        Loader::drain_events(self)
    }

    fn is_loading(&self) -> bool {
        self.busy
    }

    fn term(&self) -> &str {
        &self.session.term
    }
}
