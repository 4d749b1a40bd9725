//! Tests for remote result sequencing.

use super::*;
use crate::model::record::RecordBuilder;
use crate::search::SearchPage;

fn page_with(titles: &[&str], total_hits: usize, total_pages: usize) -> SearchPage {
    SearchPage {
        hits: titles
            .iter()
            .map(|t| RecordBuilder::new(*t).build())
            .collect(),
        page: 1,
        total_pages,
        total_hits,
    }
}

#[test]
fn new_results_are_empty_with_one_page() {
    let results = RemoteResults::new();
    assert!(results.hits().is_empty());
    assert_eq!(results.total_hits(), 0);
    assert_eq!(results.total_pages(), 1);
    assert!(!results.in_flight());
    assert_eq!(results.last_error(), None);
}

#[test]
fn issue_returns_monotonically_increasing_sequence() {
    let mut results = RemoteResults::new();
    let first = results.issue();
    let second = results.issue();
    let third = results.issue();
    assert!(first < second && second < third);
}

#[test]
fn latest_response_is_applied() {
    let mut results = RemoteResults::new();
    let seq = results.issue();
    let applied = results.apply(seq, Ok(page_with(&["Hit"], 21, 3)));
    assert_eq!(applied, Applied::Latest);
    assert_eq!(results.hits().len(), 1);
    assert_eq!(results.total_hits(), 21);
    assert_eq!(results.total_pages(), 3);
    assert!(!results.in_flight());
}

#[test]
fn stale_response_is_discarded() {
    let mut results = RemoteResults::new();
    let old = results.issue();
    let new = results.issue();

    // The older request resolves after the newer one was issued.
    let applied = results.apply(old, Ok(page_with(&["Old"], 1, 1)));
    assert_eq!(applied, Applied::Stale);
    assert!(results.hits().is_empty(), "stale hits must not be displayed");
    assert!(results.in_flight(), "newer request is still outstanding");

    let applied = results.apply(new, Ok(page_with(&["New"], 1, 1)));
    assert_eq!(applied, Applied::Latest);
    assert_eq!(results.hits()[0].title(), "New");
}

#[test]
fn out_of_order_arrival_keeps_the_newest_response() {
    let mut results = RemoteResults::new();
    let a = results.issue();
    let b = results.issue();

    // b lands first, then a: the display must stay at b's data.
    results.apply(b, Ok(page_with(&["B"], 1, 1)));
    results.apply(a, Ok(page_with(&["A"], 1, 1)));
    assert_eq!(results.hits()[0].title(), "B");
}

#[test]
fn failed_request_keeps_previous_hits_visible() {
    let mut results = RemoteResults::new();
    let seq = results.issue();
    results.apply(seq, Ok(page_with(&["Kept"], 5, 1)));

    let seq = results.issue();
    let applied = results.apply(seq, Err(crate::model::SearchError::Status { status: 502 }));
    assert_eq!(applied, Applied::Latest);
    assert_eq!(results.hits().len(), 1, "previous page stays visible");
    assert_eq!(results.hits()[0].title(), "Kept");
    assert!(results.last_error().unwrap().contains("502"));
}

#[test]
fn successful_request_clears_previous_error() {
    let mut results = RemoteResults::new();
    let seq = results.issue();
    results.apply(seq, Err(crate::model::SearchError::Status { status: 500 }));
    assert!(results.last_error().is_some());

    let seq = results.issue();
    results.apply(seq, Ok(page_with(&[], 0, 0)));
    assert_eq!(results.last_error(), None);
}

#[test]
fn empty_result_set_reports_one_page() {
    let mut results = RemoteResults::new();
    let seq = results.issue();
    results.apply(seq, Ok(page_with(&[], 0, 0)));
    assert_eq!(results.total_pages(), 1);
}
