//! Search Session Controller
//!
//! The state machine owning one user's search view: live and committed query,
//! page, sort, loading/error phase, and the interest in the single in-flight
//! request. `Idle → Loading → {Ready, Failed}`, re-entering `Loading` on
//! mount, debounce fire, explicit submit, page change, and clear.
//!
//! ## Sequencing
//! Mutators are synchronous; every asynchronous completion (debounce fire,
//! search completion) arrives as a [`SessionEvent`] on the channel handed out
//! at construction, and the driver feeds it back through
//! [`SearchSession::handle_event`]. State is therefore only ever mutated on
//! the driver's thread. Each issued request carries a monotonically
//! increasing token; a completion whose token is not the latest one issued is
//! stale and is dropped without touching state.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::debounce::Debouncer;
use super::pagination::{visible_pages, PageItem};
use super::sort::SortSpec;
use crate::client::types::{Publication, SearchResponse};
use crate::client::SearchBackend;
use crate::config::ClientConfig;
use crate::error::ClientError;

/// Lifecycle phase of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed but not yet mounted.
    Idle,
    /// A request is in flight and its response is awaited.
    Loading,
    /// The last request succeeded; results are current.
    Ready,
    /// The last request failed; an error message is set and results cleared.
    Failed,
}

/// Asynchronous completions delivered back to the session.
#[derive(Debug)]
pub enum SessionEvent {
    /// The debounce timer expired and commits `query`.
    DebounceFired { query: String, generation: u64 },
    /// A search request finished.
    SearchCompleted {
        token: u64,
        outcome: Result<SearchResponse, ClientError>,
        duration: Duration,
    },
}

/// One user's search view state. Created per mount, discarded on unmount.
pub struct SearchSession {
    backend: Arc<dyn SearchBackend>,
    events: UnboundedSender<SessionEvent>,
    debouncer: Debouncer,
    page_size: usize,

    query: String,
    debounced_query: String,
    page: usize,
    total_pages: usize,
    total_results: usize,
    results: Vec<Publication>,
    phase: Phase,
    error: Option<String>,
    sort: SortSpec,
    last_search_duration: Option<Duration>,

    /// Token of the most recently issued request. Only a completion carrying
    /// this exact value may be applied.
    latest_token: u64,
}

impl SearchSession {
    /// Builds a session and the receiver its asynchronous events arrive on.
    ///
    /// The caller drives the session: it forwards user actions through the
    /// mutators and pumps received events back into [`Self::handle_event`].
    pub fn new(
        backend: Arc<dyn SearchBackend>,
        config: &ClientConfig,
    ) -> (Self, UnboundedReceiver<SessionEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let debouncer = Debouncer::new(config.debounce_delay, events.clone());

        let session = Self {
            backend,
            events,
            debouncer,
            page_size: config.page_size,
            query: String::new(),
            debounced_query: String::new(),
            page: 1,
            total_pages: 0,
            total_results: 0,
            results: Vec::new(),
            phase: Phase::Idle,
            error: None,
            sort: SortSpec::server_default(),
            last_search_duration: None,
            latest_token: 0,
        };

        (session, receiver)
    }

    // --- User actions ---

    /// Mounts the view: issues the empty-query "browse all" search.
    pub fn mount(&mut self) {
        self.issue_search();
    }

    /// A keystroke: updates the live query and re-arms the debounce timer.
    /// No phase transition; only the timer moves.
    pub fn input(&mut self, text: &str) {
        self.query = text.to_string();
        self.debouncer.schedule(self.query.clone());
    }

    /// Explicit submit: bypasses the debounce and searches immediately.
    pub fn submit(&mut self) {
        self.debouncer.cancel();
        self.debounced_query = self.query.clone();
        self.page = 1;
        self.issue_search();
    }

    /// Clears the query entirely and re-issues the "browse all" search.
    pub fn clear(&mut self) {
        self.debouncer.cancel();
        self.query.clear();
        self.debounced_query.clear();
        self.page = 1;
        self.issue_search();
    }

    /// Requests a different page of the committed query.
    ///
    /// Only reachable from `Ready`, only for a valid page, and a no-op for the
    /// page already shown: no request is issued and no state changes.
    pub fn change_page(&mut self, page: usize) {
        if self.phase != Phase::Ready {
            return;
        }
        if page == self.page || page < 1 || page > self.total_pages {
            return;
        }
        self.page = page;
        self.issue_search();
    }

    /// Re-orders the held page in place. Stays in `Ready`; never re-fetches.
    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
        if self.phase == Phase::Ready {
            self.sort.apply(&mut self.results);
        }
    }

    // --- Event handling ---

    pub fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::DebounceFired { query, generation } => {
                self.on_debounce_fired(query, generation)
            }
            SessionEvent::SearchCompleted {
                token,
                outcome,
                duration,
            } => self.on_search_completed(token, outcome, duration),
        }
    }

    fn on_debounce_fired(&mut self, query: String, generation: u64) {
        // A fire can be queued just before its timer is cancelled; the
        // generation tells us whether this one still speaks for the user.
        if !self.debouncer.accepts(generation) {
            tracing::debug!("Dropping cancelled debounce fire for {:?}", query);
            return;
        }
        self.debounced_query = query;
        self.page = 1;
        self.issue_search();
    }

    fn on_search_completed(
        &mut self,
        token: u64,
        outcome: Result<SearchResponse, ClientError>,
        duration: Duration,
    ) {
        if token != self.latest_token {
            // A newer request was issued after this one; its answer is the
            // only one that may touch state.
            tracing::debug!(
                "Discarding stale response (token {} < {})",
                token,
                self.latest_token
            );
            return;
        }

        match outcome {
            Ok(response) => {
                tracing::debug!(
                    "Search for {:?} page {} returned {} of {} results in {:?}",
                    self.debounced_query,
                    response.page,
                    response.results.len(),
                    response.total,
                    duration
                );
                self.total_results = response.total;
                self.total_pages = response.total_pages;
                // The server is authoritative for the page, but the invariant
                // page ∈ [1, max(total_pages, 1)] holds even against a
                // misbehaving response.
                self.page = response.page.clamp(1, self.total_pages.max(1));
                self.results = response.results;
                if !self.sort.is_server_default() {
                    self.sort.apply(&mut self.results);
                }
                self.error = None;
                self.last_search_duration = Some(duration);
                self.phase = Phase::Ready;
            }
            Err(err) => {
                tracing::warn!("Search for {:?} failed: {}", self.debounced_query, err);
                self.error = Some(err.to_string());
                self.results.clear();
                self.total_results = 0;
                self.total_pages = 0;
                self.page = 1;
                self.last_search_duration = Some(duration);
                self.phase = Phase::Failed;
            }
        }
    }

    /// Issues a request for the committed query and current page.
    ///
    /// Bumping the token logically cancels interest in every older request;
    /// no transport-level cancellation is attempted.
    fn issue_search(&mut self) {
        self.latest_token += 1;
        let token = self.latest_token;
        self.phase = Phase::Loading;

        let backend = self.backend.clone();
        let events = self.events.clone();
        let query = self.debounced_query.clone();
        let page = self.page;
        let size = self.page_size;

        tokio::spawn(async move {
            let started = Instant::now();
            let outcome = backend.search(&query, page, size).await;
            let _ = events.send(SessionEvent::SearchCompleted {
                token,
                outcome,
                duration: started.elapsed(),
            });
        });
    }

    // --- State accessors ---

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn debounced_query(&self) -> &str {
        &self.debounced_query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn total_results(&self) -> usize {
        self.total_results
    }

    pub fn results(&self) -> &[Publication] {
        &self.results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.last_search_duration
    }

    /// True while the debounce timer is armed. Exposed for the view layer.
    pub fn debounce_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    // --- Derived view state ---

    /// The bounded page strip for the current state.
    pub fn visible_pages(&self) -> Vec<PageItem> {
        visible_pages(self.page, self.total_pages)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based inclusive range of the shown results, e.g. (11, 20) of 23.
    /// `None` when the page is empty.
    pub fn displayed_range(&self) -> Option<(usize, usize)> {
        if self.results.is_empty() {
            return None;
        }
        let start = (self.page - 1) * self.page_size + 1;
        Some((start, start + self.results.len() - 1))
    }
}
