//! Remote search results with request sequencing.
//!
//! The remote flow replaces its hit page wholesale on every query. Because
//! an already-sent request is not cancelled when a newer one supersedes
//! it, responses can arrive out of order; every issued request therefore
//! carries a monotonically increasing sequence number, and only a response
//! matching the latest issued number is applied. Older responses are
//! discarded.
//!
//! A failed latest request keeps the previous hits visible
//! (stale-but-consistent) and records the failure message for the status
//! line.

use crate::model::{Record, SearchError};
use crate::search::SearchPage;

/// What became of an arriving response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The response matched the latest issued request and was applied.
    Latest,
    /// The response was superseded by a newer request and discarded.
    Stale,
}

/// Server-paged results plus the request bookkeeping around them.
#[derive(Debug, Clone, Default)]
pub struct RemoteResults {
    hits: Vec<Record>,
    total_hits: usize,
    total_pages: usize,
    latest_seq: u64,
    in_flight: bool,
    last_error: Option<String>,
}

impl RemoteResults {
    /// Empty results: no hits, one (empty) page, nothing issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current page of hits, already filtered and paged by the index.
    pub fn hits(&self) -> &[Record] {
        &self.hits
    }

    /// Total matching records for the latest applied query.
    pub fn total_hits(&self) -> usize {
        self.total_hits
    }

    /// Total pages for the latest applied query, minimum 1.
    pub fn total_pages(&self) -> usize {
        self.total_pages.max(1)
    }

    /// Whether a request is in flight with no response applied yet.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Failure message of the latest request, if it failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Allocate the sequence number for the next outgoing request. The
    /// returned number becomes the latest issued; any response still in
    /// flight for an earlier number will be discarded on arrival.
    pub fn issue(&mut self) -> u64 {
        self.latest_seq += 1;
        self.in_flight = true;
        self.latest_seq
    }

    /// Apply a response for request `seq`.
    ///
    /// Only a response for the latest issued request is applied; anything
    /// older returns [`Applied::Stale`] and leaves the state untouched. On
    /// a failed latest request the previous hits stay visible and only the
    /// error message is updated.
    pub fn apply(&mut self, seq: u64, result: Result<SearchPage, SearchError>) -> Applied {
        if seq != self.latest_seq {
            return Applied::Stale;
        }
        self.in_flight = false;
        match result {
            Ok(page) => {
                self.hits = page.hits;
                self.total_hits = page.total_hits;
                self.total_pages = page.total_pages;
                self.last_error = None;
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
            }
        }
        Applied::Latest
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "remote_tests.rs"]
mod tests;
