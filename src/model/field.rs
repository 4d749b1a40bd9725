//! Search field enumeration.
//!
//! The set of searchable fields is closed: a fixed bidirectional mapping
//! between display labels and the remote index's attribute keys, so an
//! invalid field selection is unrepresentable.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ===== SearchField =====

/// Which record field a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchField {
    /// Article title (the default).
    #[default]
    Title,
    /// Author names.
    Author,
    /// Affiliation names, cities, and countries.
    Affiliation,
    /// Journal name.
    Journal,
}

impl SearchField {
    /// All fields, in selector order.
    pub const ALL: [SearchField; 4] = [
        SearchField::Title,
        SearchField::Author,
        SearchField::Affiliation,
        SearchField::Journal,
    ];

    /// Display label shown in the field selector.
    pub fn label(self) -> &'static str {
        match self {
            SearchField::Title => "Title",
            SearchField::Author => "Author",
            SearchField::Affiliation => "Affiliation",
            SearchField::Journal => "Journal",
        }
    }

    /// Attribute key sent to the remote index (`attributesToSearchOn`).
    pub fn key(self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "authors",
            SearchField::Affiliation => "affiliations",
            SearchField::Journal => "journal",
        }
    }

    /// Next field in selector order, wrapping around.
    pub fn next(self) -> SearchField {
        match self {
            SearchField::Title => SearchField::Author,
            SearchField::Author => SearchField::Affiliation,
            SearchField::Affiliation => SearchField::Journal,
            SearchField::Journal => SearchField::Title,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known search field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown search field '{0}' (expected title, author, affiliation, or journal)")]
pub struct InvalidSearchField(pub String);

impl FromStr for SearchField {
    type Err = InvalidSearchField;

    /// Parse a label or attribute key, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        SearchField::ALL
            .into_iter()
            .find(|field| field.label().eq_ignore_ascii_case(&lower) || field.key() == lower)
            .ok_or_else(|| InvalidSearchField(s.to_string()))
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_and_key_round_trip() {
        for field in SearchField::ALL {
            assert_eq!(field.label().parse::<SearchField>().unwrap(), field);
            assert_eq!(field.key().parse::<SearchField>().unwrap(), field);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("TITLE".parse::<SearchField>().unwrap(), SearchField::Title);
        assert_eq!("Author".parse::<SearchField>().unwrap(), SearchField::Author);
    }

    #[test]
    fn parse_rejects_unknown_field() {
        let err = "abstract".parse::<SearchField>().unwrap_err();
        assert!(err.to_string().contains("abstract"));
    }

    #[test]
    fn next_cycles_through_all_fields() {
        let mut field = SearchField::Title;
        for expected in [
            SearchField::Author,
            SearchField::Affiliation,
            SearchField::Journal,
            SearchField::Title,
        ] {
            field = field.next();
            assert_eq!(field, expected);
        }
    }

    #[test]
    fn default_is_title() {
        assert_eq!(SearchField::default(), SearchField::Title);
    }
}
