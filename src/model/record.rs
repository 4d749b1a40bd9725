//! Bibliographic record types.
//!
//! Records are deserialized from the Scopus-style JSON the bundled dataset
//! and the remote index both use (`dc:title`, `prism:doi`, ...). Field
//! handling is deliberately permissive: authors may be plain strings or
//! structured name objects, affiliation names may be a single string or a
//! list, citation counts may arrive as numbers or numeric strings, and any
//! field may be absent. A missing field renders as empty/omitted, never as
//! an error.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

// ===== Record =====

/// One bibliographic entry. Immutable once loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    /// Article title. Rich text: may contain simple markup tags.
    #[serde(rename = "dc:title", default)]
    title: String,

    /// Author entries, plain or structured. JSON null reads as empty.
    #[serde(default, deserialize_with = "nullable_vec")]
    author: Vec<AuthorEntry>,

    /// Affiliation entries. JSON null reads as empty.
    #[serde(default, deserialize_with = "nullable_vec")]
    affiliation: Vec<Affiliation>,

    /// DOI, when the article has one.
    #[serde(rename = "prism:doi", default)]
    doi: Option<String>,

    /// Journal name.
    #[serde(rename = "prism:publicationName", default)]
    publication_name: Option<String>,

    /// Publication date as displayed (e.g. "15 January 2023").
    #[serde(rename = "prism:coverDisplayDate", default)]
    cover_display_date: Option<String>,

    /// Normalized publication date string (YYYY-MM-DD).
    #[serde(rename = "prism:coverDate", default)]
    cover_date: Option<String>,

    /// Citation count. Accepts a JSON number or a numeric string.
    #[serde(rename = "citedby-count", default, deserialize_with = "count_from_number_or_string")]
    cited_by: u64,
}

impl Record {
    /// Raw title, markup included. This is the text the title filter runs on.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title with markup tags stripped, for display.
    pub fn display_title(&self) -> String {
        strip_markup(&self.title)
    }

    /// Author entries as loaded.
    pub fn authors(&self) -> &[AuthorEntry] {
        &self.author
    }

    /// Display names of all authors, skipping entries that assemble to
    /// nothing (fully absent structured names).
    pub fn author_names(&self) -> Vec<String> {
        self.author
            .iter()
            .map(AuthorEntry::display_name)
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Affiliation entries as loaded.
    pub fn affiliations(&self) -> &[Affiliation] {
        &self.affiliation
    }

    /// All affiliation text (names, cities, countries) joined, for filtering.
    pub fn affiliation_text(&self) -> String {
        self.affiliation
            .iter()
            .map(Affiliation::display)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// DOI, if present.
    pub fn doi(&self) -> Option<&str> {
        self.doi.as_deref()
    }

    /// Journal name, if present.
    pub fn journal(&self) -> Option<&str> {
        self.publication_name.as_deref()
    }

    /// Publication date for display: the display string when present,
    /// otherwise the normalized date string.
    pub fn display_date(&self) -> Option<&str> {
        self.cover_display_date
            .as_deref()
            .or(self.cover_date.as_deref())
    }

    /// Normalized publication date, when the dataset carries a parseable
    /// one. Malformed dates yield `None` rather than an error.
    pub fn publication_date(&self) -> Option<NaiveDate> {
        let raw = self.cover_date.as_deref()?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// Citation count.
    pub fn cited_by(&self) -> u64 {
        self.cited_by
    }
}

/// Test/fixture constructor. Production records come from serde.
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Start a record with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            record: Record {
                title: title.into(),
                ..Record::default()
            },
        }
    }

    /// Add a plain-string author.
    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.record.author.push(AuthorEntry::Plain(name.into()));
        self
    }

    /// Add a structured author.
    pub fn structured_author(
        mut self,
        family: Option<&str>,
        given: Option<&str>,
        honorific: Option<&str>,
    ) -> Self {
        self.record.author.push(AuthorEntry::Structured(StructuredName {
            name: None,
            family: family.map(String::from),
            given: given.map(String::from),
            honorific: honorific.map(String::from),
        }));
        self
    }

    /// Add an affiliation.
    pub fn affiliation(
        mut self,
        name: Option<&str>,
        city: Option<&str>,
        country: Option<&str>,
    ) -> Self {
        self.record.affiliation.push(Affiliation {
            name: name.map(|n| AffiliationName::One(n.to_string())),
            city: city.map(String::from),
            country: country.map(String::from),
        });
        self
    }

    /// Set the DOI.
    pub fn doi(mut self, doi: impl Into<String>) -> Self {
        self.record.doi = Some(doi.into());
        self
    }

    /// Set the journal name.
    pub fn journal(mut self, journal: impl Into<String>) -> Self {
        self.record.publication_name = Some(journal.into());
        self
    }

    /// Set the normalized publication date string.
    pub fn cover_date(mut self, date: impl Into<String>) -> Self {
        self.record.cover_date = Some(date.into());
        self
    }

    /// Set the citation count.
    pub fn cited_by(mut self, count: u64) -> Self {
        self.record.cited_by = count;
        self
    }

    /// Finish building.
    pub fn build(self) -> Record {
        self.record
    }
}

// ===== AuthorEntry =====

/// One author entry: either a plain name string or a structured name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorEntry {
    /// Plain name string, used verbatim.
    Plain(String),
    /// Structured name with optional parts.
    Structured(StructuredName),
}

impl AuthorEntry {
    /// Assemble the display name. Structured parts are joined in
    /// honorific, name, family, given order; fully absent parts yield an
    /// empty string.
    pub fn display_name(&self) -> String {
        match self {
            AuthorEntry::Plain(name) => name.trim().to_string(),
            AuthorEntry::Structured(parts) => parts.display_name(),
        }
    }
}

/// Structured author name. Any part may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredName {
    /// Full name, when the dataset carries one alongside the parts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,
    /// Honorific prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honorific: Option<String>,
}

impl StructuredName {
    fn display_name(&self) -> String {
        [&self.honorific, &self.name, &self.family, &self.given]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ===== Affiliation =====

/// One affiliation entry. Any field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Affiliation {
    /// Institution name: a single string or a list of strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<AffiliationName>,
    /// City.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Affiliation {
    /// "name, city, country" with absent parts omitted.
    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if let Some(name) = &self.name {
            let joined = name.joined();
            if !joined.is_empty() {
                parts.push(joined);
            }
        }
        if let Some(city) = self.city.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            parts.push(city.to_string());
        }
        if let Some(country) = self.country.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            parts.push(country.to_string());
        }
        parts.join(", ")
    }
}

/// Affiliation name: the dataset stores either a string or a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AffiliationName {
    /// Single name.
    One(String),
    /// List of names, joined for display.
    Many(Vec<String>),
}

impl AffiliationName {
    /// Single name verbatim; lists joined with ", ".
    pub fn joined(&self) -> String {
        match self {
            AffiliationName::One(name) => name.trim().to_string(),
            AffiliationName::Many(names) => names
                .iter()
                .map(|n| n.trim())
                .filter(|n| !n.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

// ===== Helpers =====

/// Strip `<...>` markup tags from rich-text titles.
///
/// Unterminated tags swallow the rest of the string, matching how a markup
/// renderer would treat them.
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn count_from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u64),
        String(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(0),
        Some(NumberOrString::Number(n)) => Ok(n),
        Some(NumberOrString::String(s)) => Ok(s.trim().parse().unwrap_or(0)),
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_scopus_style_keys() {
        let json = r#"{
            "dc:title": "On the <i>Drosophila</i> genome",
            "author": ["A. Plain", {"family": "Curie", "given": "Marie"}],
            "prism:doi": "10.1000/test.1",
            "prism:publicationName": "Nature",
            "prism:coverDate": "2023-01-15",
            "prism:coverDisplayDate": "15 January 2023",
            "citedby-count": 42
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.title(), "On the <i>Drosophila</i> genome");
        assert_eq!(record.display_title(), "On the Drosophila genome");
        assert_eq!(record.author_names(), vec!["A. Plain", "Curie Marie"]);
        assert_eq!(record.doi(), Some("10.1000/test.1"));
        assert_eq!(record.journal(), Some("Nature"));
        assert_eq!(record.display_date(), Some("15 January 2023"));
        assert_eq!(
            record.publication_date(),
            NaiveDate::from_ymd_opt(2023, 1, 15)
        );
        assert_eq!(record.cited_by(), 42);
    }

    #[test]
    fn record_tolerates_missing_fields() {
        let record: Record = serde_json::from_str(r#"{"dc:title": "Bare"}"#).unwrap();
        assert_eq!(record.title(), "Bare");
        assert!(record.author_names().is_empty());
        assert!(record.affiliations().is_empty());
        assert_eq!(record.doi(), None);
        assert_eq!(record.journal(), None);
        assert_eq!(record.display_date(), None);
        assert_eq!(record.cited_by(), 0);
    }

    #[test]
    fn record_ignores_unknown_keys() {
        let json = r#"{"dc:title": "T", "dc:identifier": "SCOPUS_ID:1", "eid": "2-s2.0-1"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.title(), "T");
    }

    #[test]
    fn record_tolerates_explicit_nulls() {
        let json = r#"{
            "dc:title": "Nulls",
            "author": null,
            "affiliation": null,
            "prism:doi": null,
            "citedby-count": null
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert!(record.author_names().is_empty());
        assert!(record.affiliations().is_empty());
        assert_eq!(record.doi(), None);
        assert_eq!(record.cited_by(), 0);
    }

    #[test]
    fn citation_count_accepts_numeric_string() {
        let record: Record =
            serde_json::from_str(r#"{"dc:title": "T", "citedby-count": "17"}"#).unwrap();
        assert_eq!(record.cited_by(), 17);
    }

    #[test]
    fn citation_count_defaults_to_zero_for_garbage_string() {
        let record: Record =
            serde_json::from_str(r#"{"dc:title": "T", "citedby-count": "n/a"}"#).unwrap();
        assert_eq!(record.cited_by(), 0);
    }

    #[test]
    fn structured_name_joins_present_parts_in_order() {
        let entry: AuthorEntry = serde_json::from_str(
            r#"{"honorific": "Dr.", "family": "Lovelace", "given": "Ada"}"#,
        )
        .unwrap();
        assert_eq!(entry.display_name(), "Dr. Lovelace Ada");
    }

    #[test]
    fn structured_name_with_all_parts_absent_is_empty() {
        let entry: AuthorEntry = serde_json::from_str("{}").unwrap();
        assert_eq!(entry.display_name(), "");
    }

    #[test]
    fn author_names_skips_empty_entries() {
        let record: Record =
            serde_json::from_str(r#"{"dc:title": "T", "author": [{}, "Real Name"]}"#).unwrap();
        assert_eq!(record.author_names(), vec!["Real Name"]);
    }

    #[test]
    fn affiliation_name_accepts_string_or_list() {
        let one: Affiliation = serde_json::from_str(r#"{"name": "MIT"}"#).unwrap();
        assert_eq!(one.display(), "MIT");

        let many: Affiliation =
            serde_json::from_str(r#"{"name": ["CNRS", "Sorbonne"], "city": "Paris"}"#).unwrap();
        assert_eq!(many.display(), "CNRS, Sorbonne, Paris");
    }

    #[test]
    fn affiliation_display_omits_absent_parts() {
        let aff: Affiliation = serde_json::from_str(r#"{"country": "Japan"}"#).unwrap();
        assert_eq!(aff.display(), "Japan");

        let empty: Affiliation = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.display(), "");
    }

    #[test]
    fn affiliation_text_joins_entries() {
        let record: Record = serde_json::from_str(
            r#"{"dc:title": "T", "affiliation": [
                {"name": "MIT", "city": "Cambridge", "country": "USA"},
                {"name": "ETH", "city": "Zürich"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(record.affiliation_text(), "MIT, Cambridge, USA; ETH, Zürich");
    }

    #[test]
    fn strip_markup_removes_tags() {
        assert_eq!(strip_markup("plain"), "plain");
        assert_eq!(strip_markup("<i>x</i> and <sub>2</sub>"), "x and 2");
        assert_eq!(strip_markup("a < b"), "a ");
    }

    #[test]
    fn display_date_falls_back_to_cover_date() {
        let record: Record =
            serde_json::from_str(r#"{"dc:title": "T", "prism:coverDate": "2023-06-01"}"#).unwrap();
        assert_eq!(record.display_date(), Some("2023-06-01"));
    }

    #[test]
    fn malformed_cover_date_yields_none_not_error() {
        let record: Record =
            serde_json::from_str(r#"{"dc:title": "T", "prism:coverDate": "June 2023"}"#).unwrap();
        assert_eq!(record.publication_date(), None);
        assert_eq!(record.display_date(), Some("June 2023"));
    }
}
