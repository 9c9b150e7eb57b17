//! Keyboard input handling.
//!
//! Maps terminal key events to [`App`] actions.  In browse mode the keys
//! navigate and trigger searches; in phrase-edit mode they edit the search
//! phrase.  Enter on a selected article hands its URL to the system
//! browser — the URL gets no validation beyond presence.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::debug;

use crate::app::{App, Mode};

/// Process a single key event, updating app state accordingly.
///
/// Only reacts to key-press events (ignoring release / repeat) so that each
/// physical keypress triggers exactly one action.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match app.mode {
        Mode::Browse => handle_browse_key(app, key),
        Mode::EditPhrase => handle_edit_key(app, key),
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Char('/') | KeyCode::Char('s') => app.start_phrase_edit(),
        KeyCode::Char('r') => app.request_refresh(),
        KeyCode::Enter => open_selected(app),
        _ => {}
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_phrase_edit(),
        KeyCode::Esc => app.cancel_phrase_edit(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => app.input.push(c),
        _ => {}
    }
}

/// Open the selected article's URL in the system browser, if it has one.
fn open_selected(app: &mut App) {
    let Some(url) = app.selected_url().map(String::from) else {
        app.status = "Selected article has no link".into();
        return;
    };
    debug!(%url, "opening article in browser");
    match spawn_browser(&url) {
        Ok(()) => app.status = format!("Opened {url}"),
        Err(e) => app.status = format!("Could not open browser: {e}"),
    }
}

#[cfg(target_os = "macos")]
fn spawn_browser(url: &str) -> std::io::Result<()> {
    std::process::Command::new("open").arg(url).spawn()?;
    Ok(())
}

#[cfg(target_os = "windows")]
fn spawn_browser(url: &str) -> std::io::Result<()> {
    std::process::Command::new("cmd")
        .args(["/C", "start", "", url])
        .spawn()?;
    Ok(())
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn spawn_browser(url: &str) -> std::io::Result<()> {
    std::process::Command::new("xdg-open").arg(url).spawn()?;
    Ok(())
}
