//! Remote search index access.
//!
//! - `client`: blocking HTTP client speaking the index's paged search API
//! - `worker`: background thread executing queries so the event loop never
//!   blocks on the network

pub mod client;
pub mod worker;

pub use client::{Client, SearchPage, SearchRequest};
pub use worker::{SearchJob, SearchOutcome, SearchWorker};
