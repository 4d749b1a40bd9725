//! Query state and its transition rules.
//!
//! A single state object, no distinct named states: search term, search
//! field, current page, page size. Each transition is atomic and enforces
//! the reset rules that keep the page index consistent with the filtered
//! view it indexes into.

use crate::model::SearchField;

/// Records shown per page.
pub const PAGE_SIZE: usize = 10;

/// The current search term, search field, and page.
///
/// # Invariants
///
/// - `page >= 1` always; transitions never store 0.
/// - `page` is NOT clamped against the total page count: an out-of-range
///   page is a visible empty-results state, not a silent correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    term: String,
    field: SearchField,
    page: usize,
    page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            term: String::new(),
            field: SearchField::default(),
            page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl QueryState {
    /// State with defaults: empty term, title field, page 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// State bootstrapped from startup arguments. A zero `page` is
    /// corrected to 1.
    pub fn with_initial(term: impl Into<String>, field: SearchField, page: usize) -> Self {
        Self {
            term: term.into(),
            field,
            page: page.max(1),
            ..Self::default()
        }
    }

    /// Current search term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Current search field.
    pub fn field(&self) -> SearchField {
        self.field
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Page size (constant).
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the search term and reset to page 1.
    ///
    /// The reset prevents a stale page index from pointing past the end of
    /// a new, possibly shorter, filtered view.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.page = 1;
    }

    /// Switch the search field: clears the term and resets to page 1.
    ///
    /// Different fields model different text domains, so the prior term is
    /// invalidated entirely.
    pub fn set_field(&mut self, field: SearchField) {
        self.field = field;
        self.term.clear();
        self.page = 1;
    }

    /// Jump to page `n` as supplied by the page-input control.
    ///
    /// Not clamped against the total page count; only the `page >= 1`
    /// invariant is enforced.
    pub fn set_page(&mut self, n: usize) {
        self.page = n.max(1);
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
