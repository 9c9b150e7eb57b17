//! headlines-tui — search a news API from the terminal.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐  FetchMsg  ┌──────────┐  draw()  ┌──────────┐
//! │ fetch.rs │ ─────────► │  app.rs  │ ───────► │  ui.rs   │
//! │ (thread) │  (channel) │ (state)  │          │ (render) │
//! └──────────┘            └──────────┘          └──────────┘
//!      ▲                       ▲
//!      │ search()              │ handle_key_event()
//! ┌──────────┐            ┌──────────┐
//! │ source/  │            │ input.rs │
//! └──────────┘            └──────────┘
//! ```
//!
//! * **`source/`** — the `NewsSource` trait and the Guardian implementation
//!   (query building, the fetch pipeline, response parsing).
//! * **`net`** — one-shot HTTP GET with fixed timeouts.
//! * **`error`** — the typed failure taxonomy surfaced to the UI.
//! * **`fetch`** — runs one search per background thread, single-flight.
//! * **`app`** — owns all application state (articles, selection, phrase).
//! * **`ui`** — pure rendering: reads `App` state and draws widgets.
//! * **`input`** — maps key events to `App` mutations.
//! * **`main`** — wires everything together: read config, set up the
//!   terminal, and run the event loop.

mod app;
mod error;
mod fetch;
mod input;
mod net;
mod source;
mod ui;

use std::io;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use fetch::FetchMsg;
use source::{GuardianSource, NewsSource};

/// Phrase searched when none is given on the command line.
const DEFAULT_PHRASE: &str = "world news";

// ---------------------------------------------------------------------------
// RAII terminal guard — idiomatic cleanup even on panic
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
///
/// Constructing this struct enters raw mode + alternate screen.  When the
/// value is dropped (normally or during stack unwinding) it restores the
/// terminal.  This prevents the common TUI bug where a panic leaves the
/// terminal in a broken state.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Install a panic hook that restores the terminal before printing the
/// panic message.  Without this, a panic inside the event loop would leave
/// raw mode enabled and the alternate screen active.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    install_panic_hook();

    // -- configuration -------------------------------------------------------
    // Search phrase from the first CLI argument; API key from the
    // environment, falling back to the provider's public development key.
    let phrase = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PHRASE.into());
    let api_key = std::env::var("GUARDIAN_API_KEY").unwrap_or_else(|_| "test".into());

    let news_source: Arc<dyn NewsSource> = Arc::new(GuardianSource::new(api_key));

    // -- terminal setup (RAII — Drop restores on exit or panic) --------------
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new(phrase);

    // At most one search is in flight: replacing the receiver abandons the
    // previous worker, whose late result is then discarded.
    let mut fetch_rx: Option<mpsc::Receiver<FetchMsg>> = None;

    // -- main event loop -----------------------------------------------------
    // Runs at ~10 fps (100 ms tick).  Each iteration:
    //   1. Start any newly-requested search (single-flight).
    //   2. Drain results from the in-flight search.
    //   3. Render the UI.
    //   4. Poll for keyboard input (non-blocking, up to tick_rate).
    let tick_rate = Duration::from_millis(100);

    loop {
        // 1. Start a pending search
        if let Some(phrase) = app.take_pending_search() {
            fetch_rx = Some(fetch::spawn(news_source.clone(), phrase));
        }

        // 2. Process fetch results
        if let Some(rx) = &fetch_rx {
            while let Ok(msg) = rx.try_recv() {
                app.apply_fetch(msg);
            }
        }

        // 3. Render
        guard.terminal.draw(|f| ui::draw(&mut app, f))?;

        // 4. Handle input
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key_event(&mut app, key);
            }
        }

        if app.quit {
            break;
        }
    }

    // `guard` is dropped here, restoring the terminal.
    Ok(())
}
