//! Guardian content API source.
//!
//! This module implements the [`NewsSource`] trait for The Guardian's
//! search endpoint and is the complete worked example for adding further
//! providers: a small amount of configuration, a pure query builder, a pure
//! body parser, and a `search()` that strings them together around one GET.
//!
//! The query builder and parser take and return plain values (no I/O) so
//! tests can exercise them without hitting the network.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use super::{Article, NewsSource};
use crate::error::FetchError;
use crate::net;

/// The Guardian's content search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://content.guardianapis.com/search";

/// A news source backed by the Guardian content API.
pub struct GuardianSource {
    /// Base search endpoint; configurable so tests can point elsewhere.
    pub endpoint: String,
    /// API key sent as the `api-key` query parameter.  The Guardian
    /// accepts the literal `"test"` key for rate-limited development use.
    pub api_key: String,
}

impl GuardianSource {
    /// Create a source against the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Build the full request URL for a search phrase.
    ///
    /// The phrase is AND-joined (see [`concatenate_query`]) and placed as
    /// the `q` parameter, with the API key as `api-key`.  Both values are
    /// percent-encoded, so the spaces inside the joined term become `%20`.
    ///
    /// Fails only if the configured endpoint itself does not parse as an
    /// absolute URL.
    pub fn build_search_url(&self, phrase: &str) -> Result<Url, FetchError> {
        let term = concatenate_query(phrase);
        let full = format!(
            "{}?q={}&api-key={}",
            self.endpoint,
            urlencoding::encode(&term),
            urlencoding::encode(&self.api_key),
        );
        Url::parse(&full).map_err(|e| FetchError::MalformedUrl(format!("{full}: {e}")))
    }
}

impl NewsSource for GuardianSource {
    fn name(&self) -> &str {
        "The Guardian"
    }

    fn search(&self, phrase: &str) -> Result<Vec<Article>, FetchError> {
        let url = self.build_search_url(phrase)?;
        debug!(phrase, url = %url, "running search");
        let body = net::fetch_text(&url)?;
        parse_search_body(&body)
    }
}

// ---------------------------------------------------------------------------
// Query building
// ---------------------------------------------------------------------------

/// Join a whitespace-separated phrase with the Guardian's boolean-AND token.
///
/// `"climate change"` becomes `"climate AND change"`, which the API reads
/// as "all of these words must appear".  This is a semantic transformation,
/// not an encoding step — percent-encoding happens later, during URL
/// assembly.  A single word passes through unchanged.
pub fn concatenate_query(phrase: &str) -> String {
    phrase.split_whitespace().collect::<Vec<_>>().join(" AND ")
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

// Wire shape: { "response": { "results": [ { "webTitle": …, … } ] } }.
// Unknown fields are ignored; the four we care about are all optional.

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    response: SearchResponse,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<RawResult>,
}

#[derive(Debug, Deserialize)]
struct RawResult {
    #[serde(rename = "webTitle")]
    web_title: Option<String>,
    #[serde(rename = "sectionName")]
    section_name: Option<String>,
    #[serde(rename = "webUrl")]
    web_url: Option<String>,
    #[serde(rename = "webPublicationDate")]
    web_publication_date: Option<String>,
}

impl From<RawResult> for Article {
    fn from(raw: RawResult) -> Self {
        Article {
            title: raw.web_title,
            section: raw.section_name,
            url: raw.web_url,
            date: raw.web_publication_date.as_deref().and_then(parse_publication_date),
        }
    }
}

/// Parse a search response body into articles, in source order.
///
/// * Empty / whitespace-only body → [`FetchError::NoData`].
/// * Invalid JSON, or JSON missing the `response`/`results` structure →
///   [`FetchError::MalformedResponse`].  All-or-nothing: no partial list
///   survives a structural failure.
/// * Each result element maps independently; an absent field is `None` in
///   the record, never an error.
pub fn parse_search_body(body: &str) -> Result<Vec<Article>, FetchError> {
    if body.trim().is_empty() {
        return Err(FetchError::NoData);
    }

    let envelope: SearchEnvelope = serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "response body failed to parse");
        FetchError::MalformedResponse(e.to_string())
    })?;

    Ok(envelope
        .response
        .results
        .into_iter()
        .map(Article::from)
        .collect())
}

/// Extract the calendar date from the provider's timestamp string.
///
/// The usual form is RFC 3339 (`2023-04-01T10:00:00Z`); a bare
/// `YYYY-MM-DD` prefix is accepted as a fallback.  Anything shorter or
/// otherwise unparseable yields `None` rather than an error, so a mangled
/// upstream date degrades to the no-date placeholder instead of failing
/// the whole fetch.
fn parse_publication_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    let prefix: String = raw.chars().take(10).collect();
    NaiveDate::parse_from_str(&prefix, "%Y-%m-%d").ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
