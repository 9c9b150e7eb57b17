//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).  The layout is a two-row split: a
//! scrollable article list (or an empty-state message) on top and a
//! one-line status / input bar at the bottom.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, Mode};

/// Draw the complete UI for one frame.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let [main_area, bottom_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    if app.articles.is_empty() {
        draw_empty_state(app, frame, main_area);
    } else {
        draw_article_list(app, frame, main_area);
    }
    draw_bottom_bar(app, frame, bottom_area);
}

/// Render the scrollable article list: date, title, `[section]`.
fn draw_article_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let list_items: Vec<ListItem> = app
        .articles
        .iter()
        .map(|article| {
            let section = article
                .section
                .as_deref()
                .map(|s| format!("[{s}]"))
                .unwrap_or_default();

            let line = Line::from(vec![
                Span::styled(
                    format!("{:<12}", article.display_date()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(" "),
                Span::styled(article.display_title(), Style::default().fg(Color::White)),
                Span::raw("  "),
                Span::styled(section, Style::default().fg(Color::Cyan)),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .title(format!(" News — \"{}\" ", app.phrase))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Render the empty-state message (loading, no results, or failure).
fn draw_empty_state(app: &App, frame: &mut Frame, area: Rect) {
    let message = if app.loading {
        "Loading…"
    } else {
        app.empty_message.as_str()
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(Color::Yellow),
    )))
    .centered()
    .block(
        Block::default()
            .title(format!(" News — \"{}\" ", app.phrase))
            .borders(Borders::ALL),
    );
    frame.render_widget(paragraph, area);
}

/// Render the bottom bar: the phrase editor while editing, otherwise the
/// status line with keybinding hints.
fn draw_bottom_bar(app: &App, frame: &mut Frame, area: Rect) {
    let bar = if app.mode == Mode::EditPhrase {
        Paragraph::new(Line::from(vec![
            Span::styled(" Search: ", Style::default().fg(Color::Cyan)),
            Span::raw(app.input.as_str()),
            Span::styled("▏", Style::default().fg(Color::Cyan)),
            Span::raw("  Enter: search  Esc: cancel"),
        ]))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(&app.status, Style::default().fg(Color::Yellow)),
            Span::raw("  "),
            Span::styled(
                format!("{} articles", app.articles.len()),
                Style::default().fg(Color::Green),
            ),
            Span::raw("  q: quit  ↑/↓: scroll  Enter: open  /: search  r: refresh"),
        ]))
    };
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchMsg;
    use crate::source::Article;
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn sample_article() -> Article {
        Article {
            title: Some("Oil spill contained".into()),
            section: Some("Environment".into()),
            url: Some("https://example.com/a".into()),
            date: NaiveDate::from_ymd_opt(2023, 4, 1),
        }
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    #[test]
    fn draw_does_not_panic_with_no_articles() {
        let mut app = App::new("news");
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(&mut app, f)).unwrap();
    }

    #[test]
    fn draw_renders_title_section_and_date() {
        let mut app = App::new("news");
        let _ = app.take_pending_search();
        app.apply_fetch(FetchMsg::Loaded(vec![sample_article()]));

        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(&mut app, f)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Oil spill contained"));
        assert!(text.contains("[Environment]"));
        assert!(text.contains("2023-04-01"));
    }

    #[test]
    fn draw_shows_empty_state_message_on_no_results() {
        let mut app = App::new("news");
        let _ = app.take_pending_search();
        app.apply_fetch(FetchMsg::Loaded(vec![]));

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(&mut app, f)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("No articles found"));
    }

    #[test]
    fn draw_shows_loading_while_fetch_in_flight() {
        let mut app = App::new("news");
        let _ = app.take_pending_search(); // marks loading

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(&mut app, f)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Loading"));
    }

    #[test]
    fn draw_shows_phrase_editor_in_edit_mode() {
        let mut app = App::new("news");
        app.start_phrase_edit();
        app.input = "oil sp".into();

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(&mut app, f)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Search: oil sp"));
    }
}
