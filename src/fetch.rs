//! Background search execution.
//!
//! Each user-initiated search runs once on its own thread and reports back
//! over an [`mpsc`] channel.  The app keeps at most one live receiver —
//! starting a new search replaces the old one, so a superseded thread's
//! `send` fails and the thread exits without delivering anything.  That is
//! the single-flight discipline: a blocking HTTP call cannot be aborted
//! mid-read, so stale results are discarded instead of raced.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use crate::error::FetchError;
use crate::source::{Article, NewsSource};

/// Outcome of one background search, sent to the UI thread.
pub enum FetchMsg {
    /// The search completed; the list may be empty.
    Loaded(Vec<Article>),
    /// The search failed with a typed reason.
    Failed(FetchError),
}

/// Run one search on a background thread.
///
/// Returns the receiver the main loop should drain on every tick.  Dropping
/// the receiver cancels delivery: the thread still finishes its in-flight
/// HTTP call (releasing the connection), then finds the channel closed and
/// exits silently.
pub fn spawn(source: Arc<dyn NewsSource>, phrase: String) -> mpsc::Receiver<FetchMsg> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let msg = match source.search(&phrase) {
            Ok(articles) => FetchMsg::Loaded(articles),
            Err(e) => FetchMsg::Failed(e),
        };
        // A send error means the receiver was dropped (superseded search
        // or app exit); the result is simply discarded.
        let _ = tx.send(msg);
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory source for exercising the channel plumbing.
    struct StubSource {
        outcome: fn(&str) -> Result<Vec<Article>, FetchError>,
    }

    impl NewsSource for StubSource {
        fn name(&self) -> &str {
            "stub"
        }

        fn search(&self, phrase: &str) -> Result<Vec<Article>, FetchError> {
            (self.outcome)(phrase)
        }
    }

    fn titled(title: &str) -> Article {
        Article {
            title: Some(title.to_string()),
            section: None,
            url: None,
            date: None,
        }
    }

    #[test]
    fn delivers_loaded_articles() {
        let source = Arc::new(StubSource {
            outcome: |phrase| Ok(vec![titled(phrase)]),
        });

        let rx = spawn(source, "hello".into());
        match rx.recv().unwrap() {
            FetchMsg::Loaded(articles) => {
                assert_eq!(articles[0].title.as_deref(), Some("hello"));
            }
            FetchMsg::Failed(e) => panic!("unexpected failure: {e}"),
        }
    }

    #[test]
    fn delivers_typed_failure() {
        let source = Arc::new(StubSource {
            outcome: |_| Err(FetchError::HttpStatus(500)),
        });

        let rx = spawn(source, "x".into());
        match rx.recv().unwrap() {
            FetchMsg::Failed(FetchError::HttpStatus(500)) => {}
            _ => panic!("expected HttpStatus(500)"),
        }
    }

    #[test]
    fn repeated_searches_yield_identical_results() {
        // The pipeline is stateless per invocation: same phrase, same
        // source state, structurally identical output.
        let source = Arc::new(StubSource {
            outcome: |_| Ok(vec![titled("a"), titled("b")]),
        });

        let first = match spawn(source.clone(), "q".into()).recv().unwrap() {
            FetchMsg::Loaded(articles) => articles,
            FetchMsg::Failed(e) => panic!("{e}"),
        };
        let second = match spawn(source, "q".into()).recv().unwrap() {
            FetchMsg::Loaded(articles) => articles,
            FetchMsg::Failed(e) => panic!("{e}"),
        };
        assert_eq!(first, second);
    }

    #[test]
    fn dropped_receiver_discards_the_result() {
        let source = Arc::new(StubSource {
            outcome: |_| Ok(vec![]),
        });

        let rx = spawn(source, "q".into());
        drop(rx);
        // Nothing to assert beyond "no panic": the worker's send fails
        // silently and the thread exits.
    }
}
