//! The core data type shared across all news sources.
//!
//! `Article` is one normalised search hit.  Every source implementation
//! converts its provider's wire format into `Article`s so the rest of the
//! application stays provider-agnostic.

use chrono::NaiveDate;

/// A single news article, normalised from a provider's search response.
///
/// All four fields are optional: a field absent in the source data is
/// `None`, never an empty string.  The record is immutable once built and
/// carries no identity beyond structural equality.
///
/// Articles are kept in the order the provider returned them — there is no
/// `Ord` impl on purpose, so nothing downstream can accidentally re-sort
/// the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Headline.
    pub title: Option<String>,
    /// Section the article was published under (e.g. "World news").
    pub section: Option<String>,
    /// Link to the full article on the provider's site.
    pub url: Option<String>,
    /// Publication date (calendar date only; the provider's timestamp is
    /// truncated to its date portion at parse time).
    pub date: Option<NaiveDate>,
}

impl Article {
    /// Headline for display, with a placeholder for absent titles.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(untitled)")
    }

    /// `YYYY-MM-DD` date for display, or a placeholder.
    pub fn display_date(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "no date".into())
    }
}
