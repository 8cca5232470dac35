//! Main layout orchestration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  HQ-ADMIN v0.1.0  http://…   ✔ Doctor added   [R]efresh [Q]uit  │
//! ├──────────────┬──────────────────────────────────────────────────┤
//! │  MENU        │  ACTIVE VIEW                                     │
//! │  [1] ...     │  ...                                             │
//! │              │                                                  │
//! │  [0] Home    │                                                  │
//! └──────────────┴──────────────────────────────────────────────────┘
//! │  context key bindings                                           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, AppState, NoticeLevel, Route};

use super::{main_panel, sidebar, views, widgets};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Body
            Constraint::Length(3), // Footer (keybinds)
        ])
        .split(size);

    render_header(frame, main_chunks[0], app);
    render_body(frame, main_chunks[1], app);
    render_footer(frame, main_chunks[2], app);

    match app.sidebar.current() {
        Route::Doctors => {
            if let Some(form) = app.directory.form() {
                widgets::render_form_modal(frame, form, app.directory.is_submitting());
            } else if app.directory.pending_delete().is_some() {
                widgets::render_confirm_modal(frame, crate::domain::DELETE_CONFIRMATION);
            }
        }
        Route::TokenPanel if app.token_panel.is_detail_open() => {
            views::token_panel::render_detail(frame, app);
        }
        _ => {}
    }

    if app.state == AppState::Help {
        widgets::render_help_overlay(frame);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = vec![
        Span::styled(
            " HQ-ADMIN ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION"), " "),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!("{} ", app.endpoint), Style::default().fg(Color::DarkGray)),
    ];

    // Newest notice wins over the refresh stamp
    let status = if let Some(notice) = app.current_notice() {
        let (mark, color) = match notice.level {
            NoticeLevel::Success => ("✔", Color::Green),
            NoticeLevel::Error => ("⚠", Color::Red),
        };
        Span::styled(
            format!(" {} {} ", mark, notice.text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    } else if let Some(time) = app.last_refresh {
        Span::styled(
            format!(" Last refresh: {} ", time.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(" No data ", Style::default().fg(Color::DarkGray))
    };

    let hints = vec![
        Span::styled("[R]", Style::default().fg(Color::Yellow)),
        Span::raw("efresh "),
        Span::styled("[Q]", Style::default().fg(Color::Yellow)),
        Span::raw("uit "),
        Span::styled("[?]", Style::default().fg(Color::Yellow)),
        Span::raw("Help "),
    ];

    let title_len: usize = title.iter().map(|s| s.content.chars().count()).sum();
    let status_len = status.content.chars().count();
    let hints_len: usize = hints.iter().map(|s| s.content.chars().count()).sum();
    let padding = area
        .width
        .saturating_sub(2)
        .saturating_sub((title_len + status_len + hints_len) as u16);

    let mut spans = title;
    spans.push(status);
    spans.push(Span::raw(" ".repeat(padding as usize)));
    spans.extend(hints);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(app.sidebar.width()),
            Constraint::Min(30),
        ])
        .split(area);

    sidebar::render(frame, body_chunks[0], app);
    main_panel::render(frame, body_chunks[1], app);
}

/// Key bindings for the active context.
fn keybinds(app: &App) -> Vec<(&'static str, &'static str)> {
    let route = app.sidebar.current();
    if route == Route::Doctors && app.directory.form().is_some() {
        return vec![("[Tab]", "Next field"), ("[Enter]", "Save"), ("[Esc]", "Cancel")];
    }
    if route == Route::Doctors && app.directory.pending_delete().is_some() {
        return vec![("[Y]", "Delete"), ("[N]", "Keep")];
    }
    if route == Route::TokenPanel && app.token_panel.is_detail_open() {
        return vec![("[I]", "Increment token"), ("[Esc]", "Close")];
    }

    let mut binds = vec![("[1-5,0]", "Route"), ("[Tab]", "Next"), ("[B]", "Sidebar")];
    match route {
        Route::Doctors => binds.extend([("[↑↓]", "Select"), ("[A]", "Add"), ("[D]", "Delete")]),
        Route::TokenPanel => binds.extend([
            ("[↑↓]", "Move"),
            ("[Enter]", "Select"),
            ("[M]", "Manage"),
            ("[I]", "Increment"),
        ]),
        _ => {}
    }
    binds
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let spans: Vec<Span> = keybinds(app)
        .into_iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(key, Style::default().fg(Color::Yellow)),
                Span::raw(format!(" {}  ", label)),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .centered();

    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crossterm::event::KeyCode;

    use super::*;
    use crate::domain::Notice;
    use crate::ui::testing::screen;

    #[test]
    fn test_header_shows_newest_notice() {
        let mut app = App::default();
        app.notices
            .post(Notice::error("Failed to fetch doctors"), Instant::now());

        assert!(screen(&app).contains("Failed to fetch doctors"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = App::default();
        app.handle_key(KeyCode::Char('?'));
        assert!(screen(&app).contains("HQ-ADMIN HELP"));
    }

    #[test]
    fn test_footer_follows_context() {
        let mut app = App::default();
        assert!(screen(&app).contains("Add"));

        app.handle_key(KeyCode::Char('a'));
        let text = screen(&app);
        assert!(text.contains("Next field"));
        assert!(text.contains("Add New Doctor"));
    }
}
