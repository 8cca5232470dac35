//! Sidebar: route list with a Home link in the footer.
//!
//! ```text
//! ┌──────────────────────┐     ┌─────┐
//! │  ADMIN PANEL         │     │ ≡   │
//! │  [1] ▦ Dashboard     │     │ ▦   │
//! │  [2] ✚ Doctors       │     │ ✚   │
//! │  ...                 │     │ ... │
//! │                      │     │     │
//! │  [0] ⌂ Home          │     │ ⌂   │
//! └──────────────────────┘     └─────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::domain::{App, Route};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let expanded = app.sidebar.is_expanded();
    let title = if expanded { " ADMIN PANEL " } else { " ≡ " };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let menu: Vec<ListItem> = Route::MENU
        .iter()
        .map(|&route| route_item(app, route, expanded))
        .collect();
    frame.render_widget(List::new(menu), chunks[0]);
    frame.render_widget(List::new([route_item(app, Route::Home, expanded)]), chunks[1]);
}

fn route_item(app: &App, route: Route, expanded: bool) -> ListItem<'static> {
    let active = app.sidebar.is_active(route);

    let line_style = if active {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    // Dim routes without a working view
    let text_style = if route.has_view() {
        Style::default()
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = Vec::with_capacity(3);
    if expanded {
        spans.push(Span::styled(
            format!("[{}] ", route.hotkey()),
            Style::default().fg(Color::Yellow),
        ));
    }
    spans.push(Span::styled(
        format!("{} ", route.icon()),
        Style::default().fg(if active { Color::Cyan } else { Color::DarkGray }),
    ));
    if expanded {
        spans.push(Span::styled(route.name(), text_style));
    }

    ListItem::new(Line::from(spans)).style(line_style)
}
