//! The typed failure taxonomy for the fetch pipeline.
//!
//! Every component converts its failures into a [`FetchError`] at the point
//! of origin instead of letting a library error escape.  The presentation
//! layer only ever sees these variants, which keeps its messaging logic (and
//! the tests for it) independent of which HTTP or JSON library is underneath.

use thiserror::Error;

/// Everything that can go wrong between "user typed a phrase" and
/// "we have a list of articles".
///
/// An *empty* article list is not an error — callers must be able to tell
/// "the search legitimately found nothing" apart from each of these.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request URL could not be built or parsed as an absolute URL.
    #[error("malformed request URL: {0}")]
    MalformedUrl(String),

    /// A network-level I/O failure: timeout, connection refused, DNS.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-200 status code.
    #[error("server returned HTTP {0}")]
    HttpStatus(u16),

    /// The response body was not the JSON shape we expect.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The response body was empty or whitespace-only.
    ///
    /// Distinct from a well-formed response with zero results.
    #[error("server returned no data")]
    NoData,
}

impl FetchError {
    /// One-line description suitable for the status bar / empty-state view.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::MalformedUrl(_) => "Could not build the search request".into(),
            FetchError::Network(_) => "Network error — check your connection".into(),
            FetchError::HttpStatus(code) => format!("The news server returned an error ({code})"),
            FetchError::MalformedResponse(_) => "The news server sent an unreadable response".into(),
            FetchError::NoData => "The news server sent an empty response".into(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FetchError::HttpStatus(status.as_u16())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}
