//! Main panel: the active route's view.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::domain::{App, Route};

use super::views;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let route = app.sidebar.current();

    let title = format!(" {} {} ", route.name().to_uppercase(), route.path());
    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match route {
        Route::Doctors => views::directory::render(frame, inner_area, app),
        Route::TokenPanel => views::token_panel::render(frame, inner_area, app),
        other => views::placeholder::render(frame, inner_area, other),
    }
}
