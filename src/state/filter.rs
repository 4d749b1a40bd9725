//! Record filtering (static flow).
//!
//! A record matches when the selected field's text, lower-cased, contains
//! the lower-cased search term as a substring. The empty term matches
//! everything. A record missing the searched field produces empty text and
//! so fails any non-empty contains-check; it is never an error.

use crate::model::{Record, SearchField};

/// The text of `field` for `record`, as the filter sees it.
///
/// Multi-valued fields (authors, affiliations) are joined so a term can
/// match any one value. Missing data yields an empty string.
pub fn field_text(record: &Record, field: SearchField) -> String {
    match field {
        SearchField::Title => record.title().to_string(),
        SearchField::Author => record.author_names().join("; "),
        SearchField::Affiliation => record.affiliation_text(),
        SearchField::Journal => record.journal().unwrap_or_default().to_string(),
    }
}

/// Whether `record` matches `term` on `field`, case-insensitively.
pub fn record_matches(record: &Record, term: &str, field: SearchField) -> bool {
    if term.is_empty() {
        return true;
    }
    field_text(record, field)
        .to_lowercase()
        .contains(&term.to_lowercase())
}

/// The filtered view: the subsequence of `records` matching `term` on
/// `field`, in dataset order. Derived, never stored.
pub fn filter_records<'a>(
    records: &'a [Record],
    term: &str,
    field: SearchField,
) -> Vec<&'a Record> {
    if term.is_empty() {
        return records.iter().collect();
    }
    let term_lower = term.to_lowercase();
    records
        .iter()
        .filter(|record| {
            field_text(record, field)
                .to_lowercase()
                .contains(&term_lower)
        })
        .collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
