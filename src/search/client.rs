//! Blocking search index client.
//!
//! Speaks the index's paged, field-scoped search API: one POST per query
//! carrying the term, page, page size, and the attribute to search on; the
//! response is one page of hits plus pagination metadata. Filtering and
//! slicing both happen server-side; the caller treats the returned hits as
//! already filtered and already paged.

use crate::model::{Record, SearchError, SearchField};
use serde::{Deserialize, Serialize};
use url::Url;

/// One outgoing query: everything the index needs to produce a page.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Search term (may be empty: matches everything).
    pub query: String,
    /// Field the term is matched against.
    pub field: SearchField,
    /// 1-based page to fetch.
    pub page: usize,
    /// Page size.
    pub hits_per_page: usize,
}

/// Wire shape of the search request body.
#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    q: &'a str,
    page: usize,
    #[serde(rename = "hitsPerPage")]
    hits_per_page: usize,
    #[serde(rename = "attributesToSearchOn")]
    attributes_to_search_on: [&'a str; 1],
}

/// One page of hits plus pagination metadata, as returned by the index.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    /// The records on this page, already filtered and paged.
    #[serde(default)]
    pub hits: Vec<Record>,
    /// 1-based page this response covers.
    #[serde(default)]
    pub page: usize,
    /// Total pages for the query.
    #[serde(rename = "totalPages", default)]
    pub total_pages: usize,
    /// Total matching records for the query.
    #[serde(rename = "totalHits", default)]
    pub total_hits: usize,
}

/// Blocking client for one search index.
#[derive(Debug)]
pub struct Client {
    http: reqwest::blocking::Client,
    base: Url,
    index: String,
}

impl Client {
    /// Build a client for the index at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidUrl`] when the base URL does not
    /// parse, and [`SearchError::Http`] when the HTTP client cannot be
    /// constructed.
    pub fn new(base_url: &str, index: impl Into<String>) -> Result<Self, SearchError> {
        let base = Url::parse(base_url)?;
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("bibv/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base,
            index: index.into(),
        })
    }

    /// Index name queries are issued against.
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Execute one paged query.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Status`] for non-success responses and
    /// [`SearchError::Http`] for transport or decode failures.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchPage, SearchError> {
        let url = format!(
            "{}/indexes/{}/search",
            self.base.as_str().trim_end_matches('/'),
            self.index
        );
        let body = WireRequest {
            q: &request.query,
            page: request.page,
            hits_per_page: request.hits_per_page,
            attributes_to_search_on: [request.field.key()],
        };

        let response = self.http.post(&url).json(&body).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response.json()?)
    }
}
