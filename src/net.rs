//! HTTP fetching.
//!
//! One GET per call, no retries, no caching.  The fetcher takes an
//! already-parsed [`Url`], so "malformed URL" failures are caught by the
//! request builder before any I/O happens and this layer only deals with
//! the network and the status line.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};
use url::Url;

use crate::error::FetchError;

/// Time allowed to establish the TCP connection.
const CONNECT_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Time allowed for the whole request once connected.
const READ_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Perform a single GET and return the response body as UTF-8 text.
///
/// * Status 200 → the full decoded body (possibly empty).
/// * Any other status → [`FetchError::HttpStatus`] with the code; the body
///   is not read.
/// * Timeout / refused connection / DNS failure → [`FetchError::Network`].
///
/// The connection and body stream are owned by this call and released on
/// every exit path, success or failure.
pub fn fetch_text(url: &Url) -> Result<String, FetchError> {
    let client = Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(READ_TIMEOUT)
        .build()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    debug!(%url, "sending GET request");
    let response = client.get(url.clone()).send()?;

    let status = response.status();
    if status.as_u16() != 200 {
        warn!(%url, status = status.as_u16(), "non-200 response");
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let body = response.text()?;
    debug!(bytes = body.len(), "received response body");
    Ok(body)
}
