//! Application state and transitions.
//!
//! `AppState` is the root state: the data mode (static dataset or remote
//! results), the query state, and the input focus. All transitions are
//! pure and return an [`Effect`] describing the I/O the shell must
//! perform; the core itself never touches the network or the clock.
//!
//! The filtered view is derived, never stored: the static flow recomputes
//! it from the dataset on demand, and the remote flow treats the server's
//! hit page as already filtered and already paged.

use crate::model::{Dataset, Record, SearchError, SearchField};
use crate::search::{SearchPage, SearchRequest};
use crate::state::filter::filter_records;
use crate::state::pager::{self, PageControl};
use crate::state::query::QueryState;
use crate::state::remote::{Applied, RemoteResults};

// ===== Mode =====

/// Where records come from. Sum type: exactly one per session.
#[derive(Debug, Clone)]
pub enum Mode {
    /// The whole dataset is in memory; filtering and slicing are local.
    Static(Dataset),
    /// One server-paged hit page at a time; only page-window math is
    /// local.
    Remote(RemoteResults),
}

// ===== Effect =====

/// I/O the shell must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do beyond re-rendering.
    None,
    /// Issue a fresh query to the search index. `debounce` is true only
    /// for term edits, which coalesce rapid keystrokes into one query.
    Search {
        /// Whether the query goes through the debounce timer.
        debounce: bool,
    },
}

// ===== Focus =====

/// Which control has keyboard focus. Sum type - exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The search input; printable keys edit the term.
    #[default]
    Search,
    /// The record list; navigation keys page through results.
    Records,
    /// The go-to-page input; digits accumulate into a page number.
    PageInput,
}

// ===== AppState =====

/// Root application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    mode: Mode,
    query: QueryState,
    /// Which control has keyboard focus.
    pub focus: Focus,
    /// Digit buffer for the go-to-page input.
    pub page_input: String,
}

impl AppState {
    /// State over `mode` with the given initial query.
    pub fn new(mode: Mode, query: QueryState) -> Self {
        Self {
            mode,
            query,
            focus: Focus::default(),
            page_input: String::new(),
        }
    }

    /// Current query state.
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Whether this session queries a remote index.
    pub fn is_remote(&self) -> bool {
        matches!(self.mode, Mode::Remote(_))
    }

    fn search_effect(&self, debounce: bool) -> Effect {
        if self.is_remote() {
            Effect::Search { debounce }
        } else {
            Effect::None
        }
    }

    // ===== Transitions =====

    /// Replace the search term; resets to page 1. Debounced in the remote
    /// flow.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> Effect {
        self.query.set_term(term);
        self.search_effect(true)
    }

    /// Append one character to the search term.
    pub fn push_term_char(&mut self, ch: char) -> Effect {
        let mut term = self.query.term().to_string();
        term.push(ch);
        self.set_search_term(term)
    }

    /// Remove the last character of the search term. No-op on an empty
    /// term.
    pub fn pop_term_char(&mut self) -> Effect {
        let mut term = self.query.term().to_string();
        if term.pop().is_none() {
            return Effect::None;
        }
        self.set_search_term(term)
    }

    /// Switch the search field; clears the term and resets to page 1.
    /// Queried immediately (no debounce) in the remote flow.
    pub fn set_search_field(&mut self, field: SearchField) -> Effect {
        self.query.set_field(field);
        self.search_effect(false)
    }

    /// Cycle to the next search field.
    pub fn cycle_search_field(&mut self) -> Effect {
        self.set_search_field(self.query.field().next())
    }

    /// Jump to page `n` as supplied by the page input. Not clamped: a page
    /// past the end is a visible empty state. Queried immediately in the
    /// remote flow.
    pub fn set_page(&mut self, n: usize) -> Effect {
        self.query.set_page(n);
        self.search_effect(false)
    }

    /// Activate a numbered pager button. The current page's button is
    /// inert.
    pub fn activate_page(&mut self, number: usize) -> Effect {
        if number == self.query.page() {
            return Effect::None;
        }
        self.set_page(number)
    }

    /// Previous page, saturating at 1.
    pub fn prev_page(&mut self) -> Effect {
        let current = self.query.page();
        if current <= 1 {
            return Effect::None;
        }
        self.set_page(current - 1)
    }

    /// Next page, clamped to the last page. Unlike the free-form page
    /// input, the prev/next keys behave like buttons and do not walk past
    /// the end.
    pub fn next_page(&mut self) -> Effect {
        let target = self.query.page() + 1;
        if target > self.total_pages() {
            return Effect::None;
        }
        self.set_page(target)
    }

    // ===== Derived views =====

    /// Length of the filtered view (static) or total hits (remote).
    pub fn total_hits(&self) -> usize {
        match &self.mode {
            Mode::Static(dataset) => self.filtered(dataset).len(),
            Mode::Remote(results) => results.total_hits(),
        }
    }

    /// Total pages for the current query, minimum 1.
    pub fn total_pages(&self) -> usize {
        match &self.mode {
            Mode::Static(dataset) => {
                pager::total_pages(self.filtered(dataset).len(), self.query.page_size())
            }
            Mode::Remote(results) => results.total_pages(),
        }
    }

    /// The records to render for the current page.
    ///
    /// Static flow: the filtered view sliced to the current page. Remote
    /// flow: the server's hit page verbatim; no local slicing.
    pub fn visible_records(&self) -> Vec<&Record> {
        match &self.mode {
            Mode::Static(dataset) => {
                let view = self.filtered(dataset);
                pager::page_slice(&view, self.query.page(), self.query.page_size()).to_vec()
            }
            Mode::Remote(results) => results.hits().iter().collect(),
        }
    }

    /// Pager controls for the current page and page count.
    pub fn page_window(&self) -> Vec<PageControl> {
        pager::page_window(self.query.page(), self.total_pages())
    }

    /// Failure message of the latest remote request, if any.
    pub fn search_error(&self) -> Option<&str> {
        match &self.mode {
            Mode::Static(_) => None,
            Mode::Remote(results) => results.last_error(),
        }
    }

    /// Whether a remote request is outstanding.
    pub fn loading(&self) -> bool {
        match &self.mode {
            Mode::Static(_) => false,
            Mode::Remote(results) => results.in_flight(),
        }
    }

    fn filtered<'a>(&self, dataset: &'a Dataset) -> Vec<&'a Record> {
        filter_records(dataset.records(), self.query.term(), self.query.field())
    }

    // ===== Remote plumbing =====

    /// Snapshot the current query as an outgoing request and allocate its
    /// sequence number. Returns `None` in the static flow.
    pub fn begin_search(&mut self) -> Option<(u64, SearchRequest)> {
        let request = SearchRequest {
            query: self.query.term().to_string(),
            field: self.query.field(),
            page: self.query.page(),
            hits_per_page: self.query.page_size(),
        };
        match &mut self.mode {
            Mode::Static(_) => None,
            Mode::Remote(results) => Some((results.issue(), request)),
        }
    }

    /// Apply a search outcome for request `seq`. Stale responses (and any
    /// outcome arriving in the static flow) are discarded.
    pub fn apply_search_outcome(
        &mut self,
        seq: u64,
        result: Result<SearchPage, SearchError>,
    ) -> Applied {
        match &mut self.mode {
            Mode::Static(_) => Applied::Stale,
            Mode::Remote(results) => results.apply(seq, result),
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
