//! Pagination/search core (pure).
//!
//! Owns the query state (search term, search field, current page, page
//! size) and computes the visible record slice and the page-window button
//! layout. All transitions are pure; the shell (the view event loop)
//! executes the effects they return.
//!
//! - `query`: the query state and its transition rules
//! - `filter`: case-insensitive field filtering (static flow)
//! - `pager`: slice math, total pages, page-window descriptors
//! - `debounce`: single-deadline debounce timer for remote queries
//! - `remote`: remote hit storage with request sequencing
//! - `app_state`: the root state tying the above together

pub mod app_state;
pub mod debounce;
pub mod filter;
pub mod pager;
pub mod query;
pub mod remote;

// Re-export for convenience
pub use app_state::{AppState, Effect, Focus, Mode};
pub use debounce::Debouncer;
pub use filter::{field_text, filter_records, record_matches};
pub use pager::{PageControl, page_slice, page_window, total_pages};
pub use query::{PAGE_SIZE, QueryState};
pub use remote::{Applied, RemoteResults};
