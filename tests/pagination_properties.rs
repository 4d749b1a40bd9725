//! Property-based tests for the pagination/search core.
//!
//! Tests validate:
//! 1. Filtering is exactly the case-insensitive-substring subsequence
//! 2. Concatenating all pages reconstructs the filtered view
//! 3. total_pages is always at least 1
//! 4. Page-window generation obeys the per-index membership rule

use bibv::model::record::RecordBuilder;
use bibv::model::{Record, SearchField};
use bibv::state::{PAGE_SIZE, PageControl, filter_records, page_slice, page_window, total_pages};
use proptest::prelude::*;

fn titles() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d ]{0,12}", 0..60)
}

fn records_from(titles: &[String]) -> Vec<Record> {
    titles
        .iter()
        .map(|t| RecordBuilder::new(t.clone()).build())
        .collect()
}

// ===== Property 1: Filtering =====

proptest! {
    #[test]
    fn filter_is_the_matching_subsequence(titles in titles(), term in "[a-d]{0,3}") {
        let records = records_from(&titles);
        let view = filter_records(&records, &term, SearchField::Title);

        let expected: Vec<&str> = titles
            .iter()
            .filter(|t| t.to_lowercase().contains(&term.to_lowercase()))
            .map(String::as_str)
            .collect();
        let actual: Vec<&str> = view.iter().map(|r| r.title()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn empty_term_returns_the_whole_dataset(titles in titles()) {
        let records = records_from(&titles);
        let view = filter_records(&records, "", SearchField::Title);
        prop_assert_eq!(view.len(), records.len());
    }

    #[test]
    fn filtering_is_case_insensitive(titles in titles(), term in "[a-d]{1,3}") {
        let records = records_from(&titles);
        let lower = filter_records(&records, &term, SearchField::Title);
        let upper = filter_records(&records, &term.to_uppercase(), SearchField::Title);
        prop_assert_eq!(lower.len(), upper.len());
    }
}

// ===== Property 2: Page reconstruction =====

proptest! {
    #[test]
    fn concatenated_pages_reconstruct_the_view(len in 0usize..300) {
        let view: Vec<usize> = (0..len).collect();
        let total = total_pages(view.len(), PAGE_SIZE);

        let mut rebuilt = Vec::new();
        for page in 1..=total {
            rebuilt.extend_from_slice(page_slice(&view, page, PAGE_SIZE));
        }
        prop_assert_eq!(rebuilt, view, "no duplicate or missing records");
    }

    #[test]
    fn last_page_has_the_remainder(len in 1usize..300) {
        let view: Vec<usize> = (0..len).collect();
        let total = total_pages(view.len(), PAGE_SIZE);
        let last = page_slice(&view, total, PAGE_SIZE);

        let expected = match len % PAGE_SIZE {
            0 => PAGE_SIZE,
            rem => rem,
        };
        prop_assert_eq!(last.len(), expected);
    }

    #[test]
    fn pages_past_the_end_are_empty(len in 0usize..100, beyond in 1usize..10) {
        let view: Vec<usize> = (0..len).collect();
        let total = total_pages(view.len(), PAGE_SIZE);
        prop_assert!(page_slice(&view, total + beyond, PAGE_SIZE).is_empty());
    }
}

// ===== Property 3: total_pages lower bound =====

proptest! {
    #[test]
    fn total_pages_is_at_least_one(len in 0usize..10_000) {
        prop_assert!(total_pages(len, PAGE_SIZE) >= 1);
    }
}

// ===== Property 4: Page-window membership =====

/// Direct restatement of the window rule, evaluated per index: numbered,
/// then ellipsis, then omitted.
fn reference_window(current: usize, total: usize) -> Vec<PageControl> {
    (1..=total)
        .filter_map(|page| {
            let numbered = total <= 10
                || page == 1
                || page == total
                || (page + 2 >= current && page <= current + 2);
            if numbered {
                Some(PageControl::Page {
                    number: page,
                    is_current: page == current,
                })
            } else if page + 3 == current || page == current + 3 {
                Some(PageControl::Ellipsis)
            } else {
                None
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn window_matches_the_per_index_rule(total in 1usize..200, current in 1usize..220) {
        prop_assert_eq!(page_window(current, total), reference_window(current, total));
    }

    #[test]
    fn window_always_contains_first_and_last_page(total in 1usize..200, current in 1usize..200) {
        let numbers: Vec<usize> = page_window(current, total)
            .iter()
            .filter_map(|c| match c {
                PageControl::Page { number, .. } => Some(*number),
                PageControl::Ellipsis => None,
            })
            .collect();
        prop_assert!(numbers.contains(&1));
        prop_assert!(numbers.contains(&total));
    }

    #[test]
    fn window_contains_current_page_when_in_range(total in 1usize..200) {
        for current in 1..=total {
            let found = page_window(current, total).iter().any(|c| {
                matches!(c, PageControl::Page { number, is_current: true } if *number == current)
            });
            prop_assert!(found, "current={} total={}", current, total);
        }
    }

    #[test]
    fn window_page_numbers_are_strictly_increasing(total in 1usize..200, current in 1usize..200) {
        let numbers: Vec<usize> = page_window(current, total)
            .iter()
            .filter_map(|c| match c {
                PageControl::Page { number, .. } => Some(*number),
                PageControl::Ellipsis => None,
            })
            .collect();
        prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn small_windows_have_no_ellipsis(total in 1usize..=10, current in 1usize..=10) {
        let window = page_window(current, total);
        prop_assert_eq!(window.len(), total);
        prop_assert!(!window.iter().any(|c| matches!(c, PageControl::Ellipsis)));
    }

    #[test]
    fn window_has_at_most_two_ellipses(total in 11usize..200, current in 1usize..200) {
        let ellipses = page_window(current, total)
            .iter()
            .filter(|c| matches!(c, PageControl::Ellipsis))
            .count();
        prop_assert!(ellipses <= 2);
    }
}
