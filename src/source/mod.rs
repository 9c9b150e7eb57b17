//! News source abstraction layer.
//!
//! This module defines the [`NewsSource`] trait and the common [`Article`]
//! type.  Concrete providers live in sub-modules (currently only
//! [`guardian`]).
//!
//! ## Adding a new provider
//!
//! 1. Create a new file in this directory (e.g. `newsapi.rs`).
//! 2. Define a struct holding the provider's configuration (endpoint, API
//!    key) and implement [`NewsSource`] for it — `name()` returns a label
//!    and `search()` runs the build-URL → GET → parse pipeline.
//! 3. Add the module below and re-export your struct in the `pub use` block.
//! 4. Construct it in `main.rs` instead of (or alongside) the Guardian one.
//!
//! The fetch task, app state, and UI are all provider-agnostic.

mod article;
mod guardian;

pub use article::Article;
pub use guardian::GuardianSource;

use crate::error::FetchError;

/// Trait every news provider must implement.
///
/// The fetch task calls [`search()`](NewsSource::search) on a background
/// thread, so implementations must be [`Send`].  Each call is independent
/// and stateless apart from reading the source's configuration.
pub trait NewsSource: Send + Sync {
    /// Human-readable label shown in the UI.
    fn name(&self) -> &str;

    /// Run one search: build the request, perform the GET, parse the body.
    ///
    /// Returns the articles in the order the provider listed them.  An
    /// empty `Vec` means the search legitimately matched nothing; every
    /// failure is a typed [`FetchError`].
    fn search(&self, phrase: &str) -> Result<Vec<Article>, FetchError>;
}
