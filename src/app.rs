//! Application state.
//!
//! `App` owns everything the UI renders: the current article list, the
//! scroll selection, the search phrase (and its in-progress edit), and the
//! status / empty-state messaging.  It never performs I/O itself — the main
//! loop feeds it [`FetchMsg`] values and asks it whether a new search is
//! pending.

use ratatui::widgets::ListState;

use crate::fetch::FetchMsg;
use crate::source::Article;

/// What keyboard input currently means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal list navigation.
    Browse,
    /// The user is editing the search phrase.
    EditPhrase,
}

pub struct App {
    /// Articles from the most recent completed search, in source order.
    /// Replaced wholesale on every fetch; never merged or re-sorted.
    pub articles: Vec<Article>,
    /// List selection state for scrolling.
    pub list_state: ListState,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// Last status message (shown in the bottom bar).
    pub status: String,
    /// Message shown in place of the list when it is empty.
    pub empty_message: String,
    /// The active search phrase.
    pub phrase: String,
    /// The phrase being edited while in [`Mode::EditPhrase`].
    pub input: String,
    /// Current input mode.
    pub mode: Mode,
    /// True while a fetch is in flight.
    pub loading: bool,
    /// Phrase waiting to be fetched; taken by the main loop.
    pending_search: Option<String>,
}

impl App {
    pub fn new(phrase: impl Into<String>) -> Self {
        let phrase = phrase.into();
        Self {
            articles: Vec::new(),
            list_state: ListState::default(),
            quit: false,
            status: format!("Searching for \"{phrase}\"…"),
            empty_message: "Loading…".into(),
            pending_search: Some(phrase.clone()),
            phrase,
            input: String::new(),
            mode: Mode::Browse,
            loading: false,
        }
    }

    // -- fetch lifecycle -----------------------------------------------------

    /// Take the phrase the main loop should fetch next, if any.
    ///
    /// Marks the app as loading; the caller is expected to actually spawn
    /// the search (replacing any in-flight one — single-flight).
    pub fn take_pending_search(&mut self) -> Option<String> {
        let phrase = self.pending_search.take()?;
        self.loading = true;
        Some(phrase)
    }

    /// Apply the outcome of a completed background search.
    pub fn apply_fetch(&mut self, msg: FetchMsg) {
        self.loading = false;
        match msg {
            FetchMsg::Loaded(articles) => {
                let count = articles.len();
                self.replace_articles(articles);
                if count == 0 {
                    self.empty_message = format!("No articles found for \"{}\"", self.phrase);
                    self.status = "No matching articles".into();
                } else {
                    self.status = format!("{count} articles for \"{}\"", self.phrase);
                }
            }
            FetchMsg::Failed(e) => {
                self.replace_articles(Vec::new());
                self.empty_message = e.user_message();
                self.status = format!("Fetch failed: {e}");
            }
        }
    }

    /// Replace the article list wholesale and reset the selection.
    fn replace_articles(&mut self, articles: Vec<Article>) {
        self.articles = articles;
        if self.articles.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    /// Re-run the current search.
    pub fn request_refresh(&mut self) {
        self.status = format!("Searching for \"{}\"…", self.phrase);
        self.pending_search = Some(self.phrase.clone());
    }

    // -- phrase editing ------------------------------------------------------

    pub fn start_phrase_edit(&mut self) {
        self.input = self.phrase.clone();
        self.mode = Mode::EditPhrase;
    }

    pub fn cancel_phrase_edit(&mut self) {
        self.input.clear();
        self.mode = Mode::Browse;
    }

    /// Commit the edited phrase and queue a search for it.
    ///
    /// A phrase that is empty after trimming is rejected and the previous
    /// phrase stays active.
    pub fn submit_phrase_edit(&mut self) {
        let trimmed = self.input.trim().to_string();
        self.mode = Mode::Browse;
        if trimmed.is_empty() {
            self.status = "Search phrase cannot be empty".into();
            return;
        }
        self.phrase = trimmed;
        self.request_refresh();
    }

    // -- navigation ----------------------------------------------------------

    pub fn select_next(&mut self) {
        if self.articles.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.articles.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.articles.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.articles.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.articles.is_empty() {
            self.list_state.select(Some(self.articles.len() - 1));
        }
    }

    /// URL of the currently selected article, if it has one.
    pub fn selected_url(&self) -> Option<&str> {
        let i = self.list_state.selected()?;
        self.articles.get(i)?.url.as_deref()
    }
}
